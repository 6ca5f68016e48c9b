//! churn — randomized command stream exercising the rust_lot engine.
//!
//! Feeds a seeded random mix of park / toggle / reset commands through a
//! session with CSV logging attached, then prints the final lot.  The fixed
//! seed makes every run reproduce the same stream, so `events.csv` can be
//! diffed across engine changes.

use std::path::Path;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lot_alloc::{Command, ParkingLot, Session};
use lot_core::{GridPos, LotConfig, VehicleClass};
use lot_output::{render, CsvWriter, LotOutputObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64   = 42;
const COMMAND_COUNT: usize = 200;
const CELL_INTERVAL: u64   = 50; // full grid dump every 50 commands

fn random_command(rng: &mut SmallRng, rows: u32, cols: u32) -> Command {
    match rng.gen_range(0..10u32) {
        // Parking dominates the mix; toggles churn slot availability.
        0..=5 => Command::Park(match rng.gen_range(0..3u32) {
            0 => VehicleClass::Car,
            1 => VehicleClass::Ev,
            _ => VehicleClass::Truck,
        }),
        6..=8 => Command::Toggle(GridPos::new(rng.gen_range(0..rows), rng.gen_range(0..cols))),
        _ => Command::Reset,
    }
}

fn main() -> Result<()> {
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "churn-out".into());
    std::fs::create_dir_all(&out_dir)?;

    let lot = ParkingLot::new(LotConfig::default())?;
    let (rows, cols) = (lot.grid().rows(), lot.grid().cols());

    let mut rng = SmallRng::seed_from_u64(SEED);
    let commands: Vec<Command> = (0..COMMAND_COUNT)
        .map(|_| random_command(&mut rng, rows, cols))
        .collect();

    let writer = CsvWriter::new(Path::new(&out_dir))?;
    let mut observer = LotOutputObserver::new(writer, CELL_INTERVAL);
    let mut session = Session::new(lot);
    session.run(commands, &mut observer)?;

    let (_writer, error) = observer.finish();
    if let Some(e) = error {
        return Err(e.into());
    }

    println!(
        "{} commands applied, {} vehicles parked; logs in {}/",
        session.seq(),
        session.lot().ledger().count(),
        out_dir
    );
    println!("{}", render(&session.lot().snapshot()));
    Ok(())
}
