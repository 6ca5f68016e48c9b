//! tiny — smallest demo for the rust_lot parking engine.
//!
//! Builds the default 11×9 lot, parks one vehicle of each class, and prints
//! the route each one took.  Finishes by dumping the snapshot as JSON — the
//! same payload a GUI collaborator would consume.

use anyhow::Result;

use lot_alloc::ParkingLot;
use lot_core::{LotConfig, VehicleClass};
use lot_grid::Snapshot;
use lot_output::{render, render_with_path};

fn main() -> Result<()> {
    let mut lot = ParkingLot::new(LotConfig::default())?;

    println!("fresh lot:");
    println!("{}", render(&lot.snapshot()));

    for class in VehicleClass::ALL {
        match lot.request_parking(class) {
            Ok(alloc) => {
                println!(
                    "{} parked at {} after {} moves (weighted cost {}):",
                    alloc.class, alloc.position, alloc.travel_steps, alloc.path.cost
                );
                println!("{}", render_with_path(&lot.snapshot(), &alloc.path));
            }
            Err(why) => println!("{class} not parked: {why}"),
        }
    }

    let snapshot: Snapshot = lot.snapshot();
    println!("snapshot as JSON:");
    println!("{}", serde_json::to_string(&snapshot)?);
    Ok(())
}
