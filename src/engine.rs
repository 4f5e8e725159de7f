//! Timetable engine: the read → check → write seam.
//!
//! Composes an [`EntityStore`] with the pure conflict checker, the grid
//! projector, and the auto-scheduler. Every placement follows the same
//! flow: validate the candidate shape, resolve the staff record (missing
//! = fatal), snapshot the assignments, run the pure check, and only then
//! write. Conflicts come back as structured data; a write race that slips
//! past the pre-check surfaces as [`TimetableError::WriteRace`].

use tracing::{debug, info};

use crate::conflict::{check_conflicts, validate_candidate, ConflictReport};
use crate::error::{Result, TimetableError};
use crate::grid::WeeklyGrid;
use crate::models::{AssignmentDraft, WeekPlan};
use crate::scheduler::GreedyScheduler;
use crate::store::EntityStore;

/// Outcome of a placement attempt.
#[derive(Debug, Clone)]
pub enum Placement {
    /// The assignment was written; carries the allocated id.
    Inserted(String),
    /// Constraint violations; nothing was written.
    Rejected(ConflictReport),
}

/// A timetable over an entity store.
///
/// # Example
///
/// ```
/// use timetable_core::engine::{Placement, Timetable};
/// use timetable_core::models::{
///     AssignmentDraft, Slot, Staff, StaffRole, Subject, WeekPlan, Weekday,
/// };
/// use timetable_core::store::MemoryStore;
///
/// let store = MemoryStore::new()
///     .with_staff(Staff::new("s1", StaffRole::Professor).with_department("CSE"))
///     .with_subject(Subject::new("sub1", "CS301").with_department("CSE"));
/// let mut timetable = Timetable::new(store, WeekPlan::default());
///
/// let draft = AssignmentDraft::new("s1", "sub1", Weekday::Monday, Slot::new("09:00-10:00"))
///     .with_department("CSE");
/// match timetable.place(&draft, "admin").unwrap() {
///     Placement::Inserted(id) => assert!(!id.is_empty()),
///     Placement::Rejected(report) => panic!("unexpected conflicts: {report:?}"),
/// }
/// ```
#[derive(Debug)]
pub struct Timetable<S: EntityStore> {
    store: S,
    plan: WeekPlan,
}

impl<S: EntityStore> Timetable<S> {
    /// Creates an engine over a store and a plan.
    pub fn new(store: S, plan: WeekPlan) -> Self {
        Self { store, plan }
    }

    /// The configured plan.
    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Checks a candidate against a fresh snapshot.
    ///
    /// `exclude_id` lets an edit flow re-check an assignment against
    /// everything but itself.
    ///
    /// # Errors
    /// [`TimetableError::InvalidCandidate`] for malformed input (before
    /// any store access); [`TimetableError::StaffNotFound`] when the
    /// referenced staff record is missing.
    pub fn check(
        &self,
        candidate: &AssignmentDraft,
        exclude_id: Option<&str>,
    ) -> Result<ConflictReport> {
        validate_candidate(candidate, &self.plan)?;

        let staff = self
            .store
            .staff_by_id(&candidate.staff_id)
            .ok_or_else(|| TimetableError::StaffNotFound(candidate.staff_id.clone()))?;

        let snapshot = self.store.assignments();
        Ok(check_conflicts(candidate, &snapshot, &staff, exclude_id))
    }

    /// Checks a candidate and writes it if admissible.
    ///
    /// Conflicts are a [`Placement::Rejected`] outcome, not an error. A
    /// concurrent writer claiming the same key between the check and the
    /// write surfaces as [`TimetableError::WriteRace`]; the caller may
    /// re-fetch and retry.
    pub fn place(&mut self, candidate: &AssignmentDraft, created_by: &str) -> Result<Placement> {
        let report = self.check(candidate, None)?;
        if report.has_conflicts() {
            debug!(
                staff = %candidate.staff_id,
                subject = %candidate.subject_id,
                conflicts = report.conflicts.len(),
                "placement rejected"
            );
            return Ok(Placement::Rejected(report));
        }

        let id = self.store.insert_assignment(candidate, created_by)?;
        info!(
            %id,
            staff = %candidate.staff_id,
            subject = %candidate.subject_id,
            day = %candidate.day,
            slot = %candidate.slot,
            "assignment placed"
        );
        Ok(Placement::Inserted(id))
    }

    /// Deletes an assignment.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.store.delete_assignment(id)?;
        info!(%id, "assignment removed");
        Ok(())
    }

    /// Projects the current assignments onto the weekly grid.
    pub fn weekly_grid(&self) -> WeeklyGrid {
        WeeklyGrid::build(&self.plan, &self.store.assignments())
    }

    /// Runs the greedy scheduler over the store's active staff and
    /// subjects. Returns proposals only; nothing is written.
    pub fn propose_schedule(&self, scheduler: &GreedyScheduler) -> Vec<AssignmentDraft> {
        scheduler.schedule(
            &self.store.list_staff(),
            &self.store.list_subjects(),
            &self.store.assignments(),
            &self.plan,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::ConflictKind;
    use crate::models::{Slot, Staff, StaffRole, Subject, Weekday};
    use crate::store::MemoryStore;

    fn timetable() -> Timetable<MemoryStore> {
        let store = MemoryStore::new()
            .with_staff(Staff::new("s1", StaffRole::Professor).with_department("CSE"))
            .with_staff(Staff::new("s2", StaffRole::AssistantProfessor).with_department("CSE"))
            .with_subject(Subject::new("sub1", "CS301").with_department("CSE"))
            .with_subject(Subject::new("sub2", "CS302").with_department("CSE"));
        Timetable::new(store, WeekPlan::default())
    }

    fn draft(staff: &str, subject: &str, slot: &str) -> AssignmentDraft {
        AssignmentDraft::new(staff, subject, Weekday::Monday, Slot::new(slot))
            .with_department("CSE")
    }

    #[test]
    fn test_place_then_conflict() {
        let mut tt = timetable();

        let outcome = tt.place(&draft("s1", "sub1", "09:00-10:00"), "admin").unwrap();
        assert!(matches!(outcome, Placement::Inserted(_)));

        // Same staff, same slot: rejected with a staff conflict.
        let outcome = tt.place(&draft("s1", "sub2", "09:00-10:00"), "admin").unwrap();
        match outcome {
            Placement::Rejected(report) => {
                assert_eq!(report.of_kind(ConflictKind::Staff).count(), 1);
            }
            Placement::Inserted(id) => panic!("unexpected insert: {id}"),
        }
    }

    #[test]
    fn test_missing_staff_is_fatal() {
        let tt = timetable();
        let err = tt.check(&draft("ghost", "sub1", "09:00-10:00"), None).unwrap_err();
        assert!(matches!(err, TimetableError::StaffNotFound(_)));
    }

    #[test]
    fn test_invalid_candidate_rejected_before_store() {
        let tt = timetable();
        let bad = AssignmentDraft::new("s1", "sub1", Weekday::Saturday, Slot::new("09:00-10:00"));
        let err = tt.check(&bad, None).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidCandidate { .. }));
    }

    #[test]
    fn test_edit_recheck_with_exclude() {
        let mut tt = timetable();
        let id = match tt.place(&draft("s1", "sub1", "09:00-10:00"), "admin").unwrap() {
            Placement::Inserted(id) => id,
            Placement::Rejected(report) => panic!("unexpected conflicts: {report:?}"),
        };

        // Re-checking the same coordinates while editing that record is
        // clear; without the exclusion it conflicts.
        let report = tt.check(&draft("s1", "sub1", "09:00-10:00"), Some(&id)).unwrap();
        assert!(!report.has_conflicts());
        let report = tt.check(&draft("s1", "sub1", "09:00-10:00"), None).unwrap();
        assert!(report.has_conflicts());
    }

    #[test]
    fn test_remove_then_place_again() {
        let mut tt = timetable();
        let id = match tt.place(&draft("s1", "sub1", "09:00-10:00"), "admin").unwrap() {
            Placement::Inserted(id) => id,
            Placement::Rejected(report) => panic!("unexpected conflicts: {report:?}"),
        };

        tt.remove(&id).unwrap();
        let outcome = tt.place(&draft("s1", "sub1", "09:00-10:00"), "admin").unwrap();
        assert!(matches!(outcome, Placement::Inserted(_)));
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut tt = timetable();
        let err = tt.remove("ghost").unwrap_err();
        assert!(matches!(err, TimetableError::AssignmentNotFound(_)));
    }

    #[test]
    fn test_weekly_grid_reflects_store() {
        let mut tt = timetable();
        tt.place(&draft("s1", "sub1", "09:00-10:00"), "admin").unwrap();

        let grid = tt.weekly_grid();
        assert_eq!(grid.assignment_count(), 1);
        let cell = grid.cell(Weekday::Monday, &Slot::new("09:00-10:00")).unwrap();
        assert_eq!(cell[0].subject_id, "sub1");
    }

    #[test]
    fn test_propose_schedule_writes_nothing() {
        let tt = timetable();
        let proposals = tt.propose_schedule(&GreedyScheduler::new());
        assert_eq!(proposals.len(), 2); // both subjects placeable
        assert!(tt.store().assignments().is_empty());
    }
}
