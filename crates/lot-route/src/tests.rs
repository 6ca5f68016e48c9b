//! Unit tests for lot-route.
//!
//! All tests run against grids generated from a config, with raw `set_kind`
//! writes used to sculpt obstacle scenarios.

#[cfg(test)]
mod helpers {
    use lot_core::LotConfig;
    use lot_grid::{layout, LotGrid};

    /// The default lot: 11×9 grid, entrance (0,4).
    pub fn default_grid() -> LotGrid {
        layout::generate(&LotConfig::default())
    }
}

// ── Target selection ──────────────────────────────────────────────────────────

#[cfg(test)]
mod target {
    use lot_core::{CellKind, GridPos, VehicleClass};

    use crate::{nearest_open_slot, RouteError};

    #[test]
    fn car_target_is_nearest_general_slot() {
        let grid = super::helpers::default_grid();
        // (2,0)/(2,2) are truck slots; the nearest general slot to the
        // entrance (0,4) is (2,4) at Manhattan distance 2.
        let target = nearest_open_slot(&grid, grid.entrance(), VehicleClass::Car).unwrap();
        assert_eq!(target, GridPos::new(2, 4));
    }

    #[test]
    fn truck_target_prefers_the_closer_dedicated_slot() {
        let grid = super::helpers::default_grid();
        let target = nearest_open_slot(&grid, grid.entrance(), VehicleClass::Truck).unwrap();
        assert_eq!(target, GridPos::new(2, 2)); // distance 4 vs 6 for (2,0)
    }

    #[test]
    fn ev_distance_ties_break_row_major() {
        let grid = super::helpers::default_grid();
        // (10,6) and (8,8) are both distance 12 from (0,4); (8,8) wins.
        let target = nearest_open_slot(&grid, grid.entrance(), VehicleClass::Ev).unwrap();
        assert_eq!(target, GridPos::new(8, 8));
    }

    #[test]
    fn occupied_and_blocked_slots_are_not_targets() {
        let mut grid = super::helpers::default_grid();
        grid.set_kind(GridPos::new(2, 4), CellKind::Occupied).unwrap();
        // (2,6) and (4,4) are now tied at distance 4; row-major pick.
        let target = nearest_open_slot(&grid, grid.entrance(), VehicleClass::Car).unwrap();
        assert_eq!(target, GridPos::new(2, 6));
    }

    #[test]
    fn no_eligible_slot_when_all_are_blocked() {
        let mut grid = super::helpers::default_grid();
        for pos in [GridPos::new(10, 6), GridPos::new(10, 8), GridPos::new(8, 8)] {
            grid.set_kind(pos, CellKind::Blocked).unwrap();
        }
        let result = nearest_open_slot(&grid, grid.entrance(), VehicleClass::Ev);
        assert!(matches!(result, Err(RouteError::NoEligibleSlot(VehicleClass::Ev))));
    }
}

// ── A* search ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use lot_core::{CellKind, GridPos};

    use crate::{AStarPlanner, Planner, RouteError};

    #[test]
    fn trivial_same_cell() {
        let grid = super::helpers::default_grid();
        let start = grid.entrance();
        let path = AStarPlanner.plan(&grid, start, start).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.cost, 0);
        assert_eq!(path.travel_steps(), 0);
        assert_eq!(path.target(), start);
    }

    #[test]
    fn straight_run_into_the_nearest_slot() {
        let grid = super::helpers::default_grid();
        let path = AStarPlanner
            .plan(&grid, grid.entrance(), GridPos::new(2, 4))
            .unwrap();
        // (0,4) → (1,4) lane → (2,4) slot: two moves, cost 1 + 2.
        assert_eq!(path.cells, vec![GridPos::new(0, 4), GridPos::new(1, 4), GridPos::new(2, 4)]);
        assert_eq!(path.travel_steps(), 2);
        assert_eq!(path.cost, 3);
    }

    #[test]
    fn unobstructed_steps_equal_manhattan_distance() {
        let grid = super::helpers::default_grid();
        let path = AStarPlanner
            .plan(&grid, grid.entrance(), GridPos::new(2, 2))
            .unwrap();
        assert_eq!(path.travel_steps(), grid.entrance().manhattan(GridPos::new(2, 2)));
        assert_eq!(path.cost, 5); // three lane moves plus the slot entry
        assert_eq!(path.target(), GridPos::new(2, 2));
    }

    #[test]
    fn detours_around_a_blocked_aisle() {
        let mut grid = super::helpers::default_grid();
        // Close the direct approach beneath the entrance.
        grid.set_kind(GridPos::new(1, 4), CellKind::Blocked).unwrap();
        let path = AStarPlanner
            .plan(&grid, grid.entrance(), GridPos::new(2, 4))
            .unwrap();
        // Shortest detour is 4 moves (e.g. across row 0, down, and back in).
        assert_eq!(path.travel_steps(), 4);
        assert_eq!(path.cost, 5);
        assert!(!path.cells.contains(&GridPos::new(1, 4)));
    }

    #[test]
    fn empty_slots_are_traversable_at_extra_cost() {
        let grid = super::helpers::default_grid();
        // Lane (2,3) to lane (2,5): cutting through slot (2,4) costs 2 + 1,
        // cheaper than the four-move lane detour through row 1.
        let path = AStarPlanner
            .plan(&grid, GridPos::new(2, 3), GridPos::new(2, 5))
            .unwrap();
        assert_eq!(path.cells, vec![GridPos::new(2, 3), GridPos::new(2, 4), GridPos::new(2, 5)]);
        assert_eq!(path.cost, 3);
    }

    #[test]
    fn occupied_cells_are_walls() {
        let mut grid = super::helpers::default_grid();
        grid.set_kind(GridPos::new(2, 4), CellKind::Occupied).unwrap();
        let path = AStarPlanner
            .plan(&grid, GridPos::new(2, 3), GridPos::new(2, 5))
            .unwrap();
        // The through-slot shortcut is gone; lane detour is the optimum.
        assert_eq!(path.travel_steps(), 4);
        assert_eq!(path.cost, 4);
    }

    #[test]
    fn walled_off_target_is_unreachable() {
        let mut grid = super::helpers::default_grid();
        let target = GridPos::new(2, 4);
        for wall in [
            GridPos::new(1, 4),
            GridPos::new(2, 3),
            GridPos::new(2, 5),
            GridPos::new(3, 4),
        ] {
            grid.set_kind(wall, CellKind::Blocked).unwrap();
        }
        let result = AStarPlanner.plan(&grid, grid.entrance(), target);
        assert!(matches!(result, Err(RouteError::Unreachable { to, .. }) if to == target));
    }
}

// ── Slot planning (target selection + search) ─────────────────────────────────

#[cfg(test)]
mod plan_to_slot {
    use lot_core::{CellKind, GridPos, VehicleClass};

    use crate::{AStarPlanner, Planner, RouteError};

    #[test]
    fn car_reaches_the_nearest_general_slot() {
        let grid = super::helpers::default_grid();
        let path = AStarPlanner
            .plan_to_slot(&grid, grid.entrance(), VehicleClass::Car)
            .unwrap();
        assert_eq!(path.target(), GridPos::new(2, 4));
        assert_eq!(path.travel_steps(), 2);
    }

    #[test]
    fn truck_lands_on_a_dedicated_slot() {
        let grid = super::helpers::default_grid();
        let path = AStarPlanner
            .plan_to_slot(&grid, grid.entrance(), VehicleClass::Truck)
            .unwrap();
        assert!(
            path.target() == GridPos::new(2, 0) || path.target() == GridPos::new(2, 2),
            "truck routed to {}",
            path.target()
        );
        assert_eq!(grid.dedication(path.target()), Some(VehicleClass::Truck));
    }

    #[test]
    fn no_fallback_when_the_chosen_target_is_walled_off() {
        let mut grid = super::helpers::default_grid();
        // Wall off the nearest general slot (2,4).  Other general slots stay
        // reachable, but target selection does not reconsider.
        for wall in [
            GridPos::new(1, 4),
            GridPos::new(2, 3),
            GridPos::new(2, 5),
            GridPos::new(3, 4),
        ] {
            grid.set_kind(wall, CellKind::Blocked).unwrap();
        }
        let result = AStarPlanner.plan_to_slot(&grid, grid.entrance(), VehicleClass::Car);
        assert!(matches!(result, Err(RouteError::Unreachable { .. })));
    }

    #[test]
    fn every_class_routes_somewhere_on_a_fresh_lot() {
        let grid = super::helpers::default_grid();
        for class in VehicleClass::ALL {
            let path = AStarPlanner
                .plan_to_slot(&grid, grid.entrance(), class)
                .unwrap();
            assert!(path.travel_steps() > 0);
            assert_eq!(path.cells[0], grid.entrance());
        }
    }
}
