//! Greedy auto-scheduler.
//!
//! # Algorithm
//!
//! 1. Order subjects (and staff) by the configured sort keys.
//! 2. For each subject, scan plan days in order, then plan slots in order.
//! 3. At each (day, slot), keep the staff members that would pass the
//!    staff-collision, weekly-workload, and daily-limit rules against the
//!    working set.
//! 4. Accept the first admissible staff member, append the placement to
//!    the working set, and move to the next subject — at most one
//!    placement per subject per run.
//!
//! Subjects with no admissible (day, slot, staff) combination are left
//! unscheduled; that is not an error. Callers union the output with the
//! existing assignments and inspect which subjects remain absent.
//!
//! Explicitly not optimal: no backtracking, no classroom or credit-hour
//! balancing, no randomization. Determinism comes entirely from the
//! ordering parameters and the plan's day/slot order.
//!
//! # Complexity
//! O(u * d * t * n) where u=subjects, d=days, t=slots, n=staff.

use tracing::debug;

use crate::conflict::check_conflicts;
use crate::models::{Assignment, AssignmentDraft, Staff, Subject, WeekPlan};

/// Subject iteration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubjectOrder {
    /// Caller-supplied order, as given.
    #[default]
    Input,
    /// Lexicographic by subject code.
    ByCode,
}

/// Staff iteration order within each (day, slot).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StaffOrder {
    /// Caller-supplied order, as given.
    #[default]
    Input,
    /// Lexicographic by staff id.
    ById,
}

/// Greedy, single-pass timetable filler.
///
/// # Example
///
/// ```
/// use timetable_core::scheduler::GreedyScheduler;
/// use timetable_core::models::{Staff, StaffRole, Subject, WeekPlan};
///
/// let staff = vec![Staff::new("s1", StaffRole::Professor)];
/// let subjects = vec![Subject::new("sub1", "CS101")];
/// let plan = WeekPlan::default();
///
/// let proposals = GreedyScheduler::new().schedule(&staff, &subjects, &[], &plan);
/// assert_eq!(proposals.len(), 1);
/// assert_eq!(proposals[0].subject_id, "sub1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    subject_order: SubjectOrder,
    staff_order: StaffOrder,
}

impl GreedyScheduler {
    /// Creates a scheduler with input-order iteration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subject iteration order.
    pub fn with_subject_order(mut self, order: SubjectOrder) -> Self {
        self.subject_order = order;
        self
    }

    /// Sets the staff iteration order.
    pub fn with_staff_order(mut self, order: StaffOrder) -> Self {
        self.staff_order = order;
        self
    }

    /// Proposes non-conflicting placements for as many subjects as possible.
    ///
    /// Returns proposed additions only; `existing` is never modified or
    /// re-emitted. Inactive staff are skipped. Proposals inherit the
    /// subject's department and semester and carry no classroom.
    pub fn schedule(
        &self,
        staff: &[Staff],
        subjects: &[Subject],
        existing: &[Assignment],
        plan: &WeekPlan,
    ) -> Vec<AssignmentDraft> {
        let staff_order = self.sorted_staff(staff);
        let subject_order = self.sorted_subjects(subjects);

        let mut proposals: Vec<AssignmentDraft> = Vec::new();
        // Working set: existing assignments plus every accepted placement.
        let mut working: Vec<Assignment> = existing.to_vec();

        for &subject_idx in &subject_order {
            let subject = &subjects[subject_idx];
            let placed = self.place_subject(subject, staff, &staff_order, &working, plan);

            if let Some(draft) = placed {
                debug!(
                    subject = %subject.id,
                    staff = %draft.staff_id,
                    day = %draft.day,
                    slot = %draft.slot,
                    "proposed placement"
                );
                working.push(
                    draft
                        .clone()
                        .into_assignment(format!("proposal-{}", proposals.len()), "auto"),
                );
                proposals.push(draft);
            } else {
                debug!(subject = %subject.id, "no admissible placement, leaving unscheduled");
            }
        }

        proposals
    }

    /// Finds the first admissible (day, slot, staff) for one subject.
    fn place_subject(
        &self,
        subject: &Subject,
        staff: &[Staff],
        staff_order: &[usize],
        working: &[Assignment],
        plan: &WeekPlan,
    ) -> Option<AssignmentDraft> {
        for &day in plan.days() {
            for slot in plan.slots() {
                for &staff_idx in staff_order {
                    let member = &staff[staff_idx];
                    if !member.is_active {
                        continue;
                    }

                    let draft = AssignmentDraft::new(
                        member.id.clone(),
                        subject.id.clone(),
                        day,
                        slot.clone(),
                    )
                    .with_department(subject.department.clone())
                    .with_semester(subject.semester);

                    if check_conflicts(&draft, working, member, None).is_clear() {
                        return Some(draft);
                    }
                }
            }
        }
        None
    }

    fn sorted_subjects(&self, subjects: &[Subject]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..subjects.len()).collect();
        if self.subject_order == SubjectOrder::ByCode {
            indices.sort_by(|&a, &b| subjects[a].code.cmp(&subjects[b].code));
        }
        indices
    }

    fn sorted_staff(&self, staff: &[Staff]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..staff.len()).collect();
        if self.staff_order == StaffOrder::ById {
            indices.sort_by(|&a, &b| staff[a].id.cmp(&staff[b].id));
        }
        indices
    }
}

/// Runs the scheduler with default (input) ordering.
pub fn auto_schedule(
    staff: &[Staff],
    subjects: &[Subject],
    existing: &[Assignment],
    plan: &WeekPlan,
) -> Vec<AssignmentDraft> {
    GreedyScheduler::new().schedule(staff, subjects, existing, plan)
}
