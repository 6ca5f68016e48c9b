//! Command-stream driver.
//!
//! The presentation layer reduces every user action to one of three
//! [`Command`]s and feeds them here.  [`Session::apply`] runs one command to
//! completion against the lot and reports the outcome through the observer.
//! A rejected parking request is an outcome (`on_rejected`), not an error:
//! a full lot should not kill the command stream, any more than a "no free
//! spaces" dialog closes a kiosk.  Infrastructure errors (an out-of-bounds
//! toggle from a broken caller) do propagate.

use lot_core::{GridPos, VehicleClass};
use lot_route::Planner;

use crate::{AllocError, AllocResult, LotObserver, ParkingLot};

/// One externally-issued action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Park a vehicle of the given class, starting from the entrance.
    Park(VehicleClass),
    /// Cycle the state of one cell.
    Toggle(GridPos),
    /// Rebuild the lot from its config.
    Reset,
}

/// Applies [`Command`]s to a [`ParkingLot`], numbering them and invoking
/// observer hooks per outcome.
pub struct Session<P: Planner> {
    lot: ParkingLot<P>,
    seq: u64,
}

impl<P: Planner> Session<P> {
    pub fn new(lot: ParkingLot<P>) -> Self {
        Self { lot, seq: 0 }
    }

    pub fn lot(&self) -> &ParkingLot<P> {
        &self.lot
    }

    pub fn lot_mut(&mut self) -> &mut ParkingLot<P> {
        &mut self.lot
    }

    /// Sequence number of the most recently applied command (0 = none yet).
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Run one command to completion.
    pub fn apply<O: LotObserver>(&mut self, command: Command, observer: &mut O) -> AllocResult<()> {
        self.seq += 1;
        let seq = self.seq;

        match command {
            Command::Park(class) => match self.lot.request_parking(class) {
                Ok(alloc) => observer.on_parked(seq, &alloc),
                Err(AllocError::Route(why)) => observer.on_rejected(seq, class, &why),
                Err(other) => return Err(other),
            },
            Command::Toggle(pos) => {
                let outcome = self.lot.toggle(pos)?;
                observer.on_toggled(seq, pos, outcome);
            }
            Command::Reset => {
                self.lot.reset();
                observer.on_reset(seq);
            }
        }

        observer.on_applied(seq, self.lot.grid(), self.lot.ledger());
        Ok(())
    }

    /// Apply a whole command stream in order.
    pub fn run<O, I>(&mut self, commands: I, observer: &mut O) -> AllocResult<()>
    where
        O: LotObserver,
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.apply(command, observer)?;
        }
        Ok(())
    }
}
