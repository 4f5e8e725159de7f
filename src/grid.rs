//! Weekly grid projection.
//!
//! Transforms a flat assignment collection into a dense day × slot grid
//! following the plan's canonical ordering, for display and iteration.
//! Every plan cell is initialized (possibly empty). Assignments whose day
//! or slot is outside the plan are dropped from the grid and logged at
//! debug level — out-of-schedule records are tolerated, not an error.
//! Duplicate occupants of one cell (which the store invariants should
//! prevent) are all retained in input order.

use tracing::debug;

use crate::models::{Assignment, Slot, WeekPlan, Weekday};

/// A dense day × slot grid of assignments.
///
/// # Example
///
/// ```
/// use timetable_core::grid::WeeklyGrid;
/// use timetable_core::models::{AssignmentDraft, Slot, WeekPlan, Weekday};
///
/// let plan = WeekPlan::default();
/// let a = AssignmentDraft::new("s1", "os", Weekday::Monday, Slot::new("09:00-10:00"))
///     .into_assignment("a1", "admin");
///
/// let grid = WeeklyGrid::build(&plan, &[a]);
/// let cell = grid.cell(Weekday::Monday, &Slot::new("09:00-10:00")).unwrap();
/// assert_eq!(cell.len(), 1);
/// assert_eq!(grid.assignment_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct WeeklyGrid {
    days: Vec<Weekday>,
    slots: Vec<Slot>,
    // cells[day_index][slot_index]
    cells: Vec<Vec<Vec<Assignment>>>,
}

impl WeeklyGrid {
    /// Projects assignments onto the plan's day × slot grid.
    pub fn build(plan: &WeekPlan, assignments: &[Assignment]) -> Self {
        let days = plan.days().to_vec();
        let slots = plan.slots().to_vec();
        let mut cells = vec![vec![Vec::new(); slots.len()]; days.len()];

        for assignment in assignments {
            match (
                plan.day_index(assignment.day),
                plan.slot_index(&assignment.slot),
            ) {
                (Some(d), Some(s)) => cells[d][s].push(assignment.clone()),
                _ => {
                    debug!(
                        assignment = %assignment.id,
                        day = %assignment.day,
                        slot = %assignment.slot,
                        "dropping out-of-plan assignment from grid"
                    );
                }
            }
        }

        Self { days, slots, cells }
    }

    /// The grid's day axis (plan order).
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// The grid's slot axis (plan order).
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The assignments in one cell, or `None` for coordinates outside the
    /// plan.
    pub fn cell(&self, day: Weekday, slot: &Slot) -> Option<&[Assignment]> {
        let d = self.days.iter().position(|x| *x == day)?;
        let s = self.slots.iter().position(|x| x == slot)?;
        Some(&self.cells[d][s])
    }

    /// Iterates all cells in day-major, slot-minor plan order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Weekday, &Slot, &[Assignment])> {
        self.days.iter().enumerate().flat_map(move |(d, day)| {
            self.slots
                .iter()
                .enumerate()
                .map(move |(s, slot)| (*day, slot, self.cells[d][s].as_slice()))
        })
    }

    /// Flattens the grid back to the retained assignments, cell by cell.
    pub fn flatten(&self) -> Vec<&Assignment> {
        self.iter_cells()
            .flat_map(|(_, _, cell)| cell.iter())
            .collect()
    }

    /// Number of retained assignments.
    pub fn assignment_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .map(|cell| cell.len())
            .sum()
    }

    /// Whether the grid holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignment_count() == 0
    }
}

/// Convenience wrapper over [`WeeklyGrid::build`].
pub fn build_weekly_grid(plan: &WeekPlan, assignments: &[Assignment]) -> WeeklyGrid {
    WeeklyGrid::build(plan, assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssignmentDraft;
    use std::collections::HashMap;

    fn assignment(id: &str, staff: &str, day: Weekday, slot: &str) -> Assignment {
        AssignmentDraft::new(staff, "os", day, Slot::new(slot)).into_assignment(id, "admin")
    }

    #[test]
    fn test_every_cell_initialized() {
        let plan = WeekPlan::default();
        let grid = WeeklyGrid::build(&plan, &[]);

        assert_eq!(grid.iter_cells().count(), plan.cell_count());
        for (_, _, cell) in grid.iter_cells() {
            assert!(cell.is_empty());
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn test_assignments_land_in_their_cells() {
        let plan = WeekPlan::default();
        let a = assignment("a1", "s1", Weekday::Monday, "09:00-10:00");
        let b = assignment("a2", "s2", Weekday::Friday, "16:00-17:00");
        let grid = WeeklyGrid::build(&plan, &[a, b]);

        let mon = grid.cell(Weekday::Monday, &Slot::new("09:00-10:00")).unwrap();
        assert_eq!(mon.len(), 1);
        assert_eq!(mon[0].id, "a1");

        let fri = grid.cell(Weekday::Friday, &Slot::new("16:00-17:00")).unwrap();
        assert_eq!(fri[0].id, "a2");

        assert!(grid
            .cell(Weekday::Monday, &Slot::new("08:00-09:00"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_out_of_plan_assignments_dropped() {
        let plan = WeekPlan::default(); // five days, hour slots
        let in_plan = assignment("a1", "s1", Weekday::Monday, "09:00-10:00");
        let bad_day = assignment("a2", "s2", Weekday::Saturday, "09:00-10:00");
        let bad_slot = assignment("a3", "s3", Weekday::Monday, "23:00-24:00");
        let grid = WeeklyGrid::build(&plan, &[in_plan, bad_day, bad_slot]);

        assert_eq!(grid.assignment_count(), 1);
        assert_eq!(grid.flatten()[0].id, "a1");
    }

    #[test]
    fn test_cell_outside_plan_is_none() {
        let plan = WeekPlan::default();
        let grid = WeeklyGrid::build(&plan, &[]);
        assert!(grid.cell(Weekday::Saturday, &Slot::new("09:00-10:00")).is_none());
        assert!(grid.cell(Weekday::Monday, &Slot::new("nope")).is_none());
    }

    #[test]
    fn test_duplicate_cell_occupants_retained_in_order() {
        // Should not happen under the store invariants; the grid still
        // keeps both, first inserted first.
        let plan = WeekPlan::default();
        let a = assignment("a1", "s1", Weekday::Monday, "09:00-10:00");
        let b = assignment("a2", "s1", Weekday::Monday, "09:00-10:00");
        let grid = WeeklyGrid::build(&plan, &[a, b]);

        let cell = grid.cell(Weekday::Monday, &Slot::new("09:00-10:00")).unwrap();
        assert_eq!(cell.len(), 2);
        assert_eq!(cell[0].id, "a1");
        assert_eq!(cell[1].id, "a2");
    }

    #[test]
    fn test_flatten_round_trip_multiset() {
        // Flattening equals the input as a multiset, minus the documented
        // out-of-plan drops.
        let plan = WeekPlan::new(
            Weekday::FIVE_DAY.to_vec(),
            WeekPlan::period_slots(4),
        );
        let input = vec![
            assignment("a1", "s1", Weekday::Monday, "1"),
            assignment("a2", "s2", Weekday::Monday, "1"),
            assignment("a3", "s1", Weekday::Wednesday, "4"),
            assignment("a4", "s3", Weekday::Saturday, "1"), // dropped: day
            assignment("a5", "s3", Weekday::Monday, "9"),   // dropped: slot
        ];
        let grid = WeeklyGrid::build(&plan, &input);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for a in grid.flatten() {
            *counts.entry(a.id.as_str()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 3);
        assert_eq!(counts["a1"], 1);
        assert_eq!(counts["a2"], 1);
        assert_eq!(counts["a3"], 1);
    }
}
