//! Unit tests for lot-output.

#[cfg(test)]
mod helpers {
    use lot_alloc::ParkingLot;
    use lot_core::LotConfig;
    use lot_route::AStarPlanner;

    pub fn default_lot() -> ParkingLot<AStarPlanner> {
        ParkingLot::new(LotConfig::default()).unwrap()
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_writer {
    use crate::{CellRow, CsvWriter, EventRow, OutputWriter};

    fn event(seq: u64) -> EventRow {
        EventRow {
            seq,
            event:        "parked",
            class:        "car",
            row:          Some(2),
            col:          Some(4),
            travel_steps: Some(2),
            path_cost:    Some(3),
        }
    }

    #[test]
    fn headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.write_event(&event(1)).unwrap();
        writer.write_event(&event(2)).unwrap();
        writer.finish().unwrap();

        let events = std::fs::read_to_string(dir.path().join("events.csv")).unwrap();
        let lines: Vec<&str> = events.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "seq,event,class,row,col,travel_steps,path_cost");
        assert_eq!(lines[1], "1,parked,car,2,4,2,3");
    }

    #[test]
    fn optional_fields_are_empty_columns() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer
            .write_event(&EventRow {
                seq:          7,
                event:        "reset",
                class:        "",
                row:          None,
                col:          None,
                travel_steps: None,
                path_cost:    None,
            })
            .unwrap();
        writer.finish().unwrap();

        let events = std::fs::read_to_string(dir.path().join("events.csv")).unwrap();
        assert_eq!(events.lines().nth(1).unwrap(), "7,reset,,,,,");
    }

    #[test]
    fn cell_dump_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer
            .write_cells(&[CellRow {
                seq:       3,
                row:       2,
                col:       0,
                kind:      "empty",
                dedicated: "truck",
                occupant:  "",
            }])
            .unwrap();
        writer.finish().unwrap();

        let cells = std::fs::read_to_string(dir.path().join("cells.csv")).unwrap();
        let lines: Vec<&str> = cells.lines().collect();
        assert_eq!(lines[0], "seq,row,col,kind,dedicated,occupant");
        assert_eq!(lines[1], "3,2,0,empty,truck,");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

// ── Observer bridge ───────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use lot_alloc::{Command, Session};
    use lot_core::{GridPos, VehicleClass};

    use crate::{CsvWriter, LotOutputObserver};

    #[test]
    fn one_event_row_per_command() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = LotOutputObserver::new(writer, 0);

        let mut session = Session::new(super::helpers::default_lot());
        session
            .run(
                [
                    Command::Park(VehicleClass::Car),
                    Command::Park(VehicleClass::Truck),
                    Command::Toggle(GridPos::new(4, 4)),
                    Command::Reset,
                ],
                &mut observer,
            )
            .unwrap();

        let (_writer, error) = observer.finish();
        assert!(error.is_none());

        let events = std::fs::read_to_string(dir.path().join("events.csv")).unwrap();
        let lines: Vec<&str> = events.lines().collect();
        assert_eq!(lines.len(), 5); // header + 4 commands
        assert!(lines[1].starts_with("1,parked,car,2,4,"));
        assert!(lines[2].starts_with("2,parked,truck,2,2,"));
        assert_eq!(lines[3], "3,closed,,4,4,,");
        assert_eq!(lines[4], "4,reset,,,,,");
    }

    #[test]
    fn rejections_and_departures_are_labelled() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = LotOutputObserver::new(writer, 0);

        let mut session = Session::new(super::helpers::default_lot());
        session
            .run(
                [
                    Command::Park(VehicleClass::Truck),
                    Command::Park(VehicleClass::Truck),
                    Command::Park(VehicleClass::Truck), // both slots taken
                    Command::Toggle(GridPos::new(2, 2)), // vehicle departs
                    Command::Toggle(GridPos::new(1, 1)), // lane: ignored
                ],
                &mut observer,
            )
            .unwrap();
        observer.finish();

        let events = std::fs::read_to_string(dir.path().join("events.csv")).unwrap();
        let lines: Vec<&str> = events.lines().collect();
        assert_eq!(lines[3], "3,rejected,truck,,,,");
        assert_eq!(lines[4], "4,departed,truck,2,2,,");
        assert_eq!(lines[5], "5,ignored,,1,1,,");
    }

    #[test]
    fn cell_dumps_follow_the_interval() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut observer = LotOutputObserver::new(writer, 2);

        let mut session = Session::new(super::helpers::default_lot());
        session
            .run(
                [
                    Command::Park(VehicleClass::Car),
                    Command::Park(VehicleClass::Car),
                    Command::Park(VehicleClass::Car),
                    Command::Park(VehicleClass::Car),
                ],
                &mut observer,
            )
            .unwrap();
        observer.finish();

        let cells = std::fs::read_to_string(dir.path().join("cells.csv")).unwrap();
        // Header + two dumps (after commands 2 and 4) of 11×9 cells each.
        assert_eq!(cells.lines().count(), 1 + 2 * 99);
    }
}

// ── Text rendering ────────────────────────────────────────────────────────────

#[cfg(test)]
mod render {
    use lot_alloc::Command;
    use lot_alloc::{NoopObserver, Session};
    use lot_core::{GridPos, VehicleClass};

    use crate::{render, render_with_path};

    #[test]
    fn fresh_lot_layout() {
        let lot = super::helpers::default_lot();
        let text = render(&lot.snapshot());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines.iter().all(|l| l.chars().count() == 9));
        assert_eq!(lines[0], "....E....");
        assert_eq!(lines[1], ".........");
        assert_eq!(lines[2], "T.T.P.P.P");
        assert_eq!(lines[8], "P.P.P.P.V");
        assert_eq!(lines[10], "P.P.P.V.V");
    }

    #[test]
    fn occupants_and_blocked_slots_show() {
        let mut lot = super::helpers::default_lot();
        lot.request_parking(VehicleClass::Car).unwrap();
        lot.toggle(GridPos::new(2, 6)).unwrap();

        let lines: Vec<String> = render(&lot.snapshot()).lines().map(String::from).collect();
        assert_eq!(lines[2], "T.T.c.X.P");
    }

    #[test]
    fn path_trace_keeps_the_destination_glyph() {
        let mut lot = super::helpers::default_lot();
        let alloc = lot.request_parking(VehicleClass::Car).unwrap();

        let text = render_with_path(&lot.snapshot(), &alloc.path);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "....*....");
        assert_eq!(lines[1], "....*....");
        assert_eq!(lines[2], "T.T.c.P.P");
    }

    #[test]
    fn session_reset_restores_the_fresh_rendering() {
        let mut session = Session::new(super::helpers::default_lot());
        let fresh = render(&session.lot().snapshot());

        session
            .run(
                [Command::Park(VehicleClass::Ev), Command::Reset],
                &mut NoopObserver,
            )
            .unwrap();
        assert_eq!(render(&session.lot().snapshot()), fresh);
    }
}
