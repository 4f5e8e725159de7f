//! Conflict detection for candidate assignments.
//!
//! Decides admissibility of one candidate against a snapshot of the
//! current assignment set. The result is an itemized report, not a single
//! boolean: every applicable rule runs, so the caller can surface all
//! simultaneous violations in one response.
//!
//! Rules:
//! - staff double-booking: same (staff, day, slot) already taken
//! - classroom double-booking: same (classroom, day, slot) already taken
//! - weekly workload: department+semester assignment count at the
//!   role-derived hour ceiling
//! - daily limit: per-day assignment count at the staff member's
//!   `max_periods_per_day`
//!
//! All functions here are pure and side-effect free; the store-facing
//! path lives in [`crate::engine`].
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling", §2 (hard constraints)

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};
use crate::models::{Assignment, AssignmentDraft, Staff, WeekPlan, Weekday};

/// Categories of assignment conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// The staff member already teaches in this slot.
    Staff,
    /// The classroom is already booked in this slot.
    Classroom,
    /// The staff member is at the weekly hour ceiling for this
    /// department and semester.
    Workload,
    /// The staff member is at the per-day assignment ceiling.
    #[serde(rename = "daily_limit")]
    DailyLimit,
}

/// A single detected conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict category.
    pub kind: ConflictKind,
    /// Human-readable description for display.
    pub message: String,
}

impl Conflict {
    fn new(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Staff double-booking against an existing assignment.
    pub fn staff_busy(existing: &Assignment) -> Self {
        let room = existing
            .classroom_id
            .as_deref()
            .map(|c| format!(" in {c}"))
            .unwrap_or_default();
        Self::new(
            ConflictKind::Staff,
            format!(
                "staff already teaching {} at this time{room}",
                existing.subject_id
            ),
        )
    }

    /// Classroom double-booking against an existing assignment.
    pub fn classroom_busy(classroom_id: &str, existing: &Assignment) -> Self {
        Self::new(
            ConflictKind::Classroom,
            format!(
                "classroom {classroom_id} already booked for {} by {}",
                existing.subject_id, existing.staff_id
            ),
        )
    }

    /// Weekly workload ceiling reached.
    pub fn workload_exceeded(candidate: &AssignmentDraft, ceiling: u32) -> Self {
        Self::new(
            ConflictKind::Workload,
            format!(
                "staff has reached the weekly hour limit ({ceiling}) for {} {} semester",
                candidate.department, candidate.semester
            ),
        )
    }

    /// Per-day assignment ceiling reached.
    pub fn daily_limit_reached(max: u32) -> Self {
        Self::new(
            ConflictKind::DailyLimit,
            format!("staff has reached maximum periods per day ({max})"),
        )
    }
}

/// The itemized outcome of a conflict check.
///
/// No ordering guarantee among the conflicts; callers must not assume the
/// first entry is the most severe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictReport {
    /// All detected conflicts.
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    /// Whether any rule was violated.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Whether the candidate is admissible.
    pub fn is_clear(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Conflicts of one category.
    pub fn of_kind(&self, kind: ConflictKind) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter().filter(move |c| c.kind == kind)
    }

    fn push(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }
}

/// Daily-limit status for a staff member on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLimit {
    /// Assignments already held on the day.
    pub current_count: u32,
    /// The staff member's per-day ceiling.
    pub max_allowed: u32,
    /// Whether one more assignment fits.
    pub can_add: bool,
}

/// Checks a candidate against the current assignment snapshot.
///
/// Pure and idempotent: two calls with the same inputs return the same
/// report. `exclude_id` lets a re-check ignore the assignment being
/// edited (remove + recreate flows re-check against everything else).
///
/// The staff record must already be resolved; a missing record is the
/// caller's fatal [`TimetableError::StaffNotFound`], not a conflict
/// (see [`crate::engine::Timetable::check`]).
///
/// # Example
///
/// ```
/// use timetable_core::conflict::check_conflicts;
/// use timetable_core::models::{AssignmentDraft, Slot, Staff, StaffRole, Weekday};
///
/// let staff = Staff::new("s1", StaffRole::Professor);
/// let booked = AssignmentDraft::new("s1", "os", Weekday::Monday, Slot::new("09:00-10:00"))
///     .into_assignment("a1", "admin");
/// let candidate = AssignmentDraft::new("s1", "dbms", Weekday::Monday, Slot::new("09:00-10:00"));
///
/// let report = check_conflicts(&candidate, &[booked], &staff, None);
/// assert!(report.has_conflicts());
/// ```
pub fn check_conflicts(
    candidate: &AssignmentDraft,
    assignments: &[Assignment],
    staff: &Staff,
    exclude_id: Option<&str>,
) -> ConflictReport {
    let mut report = ConflictReport::default();
    let considered = || {
        assignments
            .iter()
            .filter(move |a| exclude_id != Some(a.id.as_str()))
    };

    // Rule 1: staff double-booking.
    if let Some(existing) = considered()
        .find(|a| a.occupies_staff_slot(&candidate.staff_id, candidate.day, &candidate.slot))
    {
        report.push(Conflict::staff_busy(existing));
    }

    // Rule 2: classroom double-booking, only when the candidate books a room.
    if let Some(classroom_id) = candidate.classroom_id.as_deref() {
        if let Some(existing) = considered()
            .find(|a| a.occupies_classroom_slot(classroom_id, candidate.day, &candidate.slot))
        {
            report.push(Conflict::classroom_busy(classroom_id, existing));
        }
    }

    // Rule 3: weekly workload ceiling over department+semester.
    let weekly = considered()
        .filter(|a| {
            a.staff_id == candidate.staff_id
                && a.department == candidate.department
                && a.semester == candidate.semester
        })
        .count() as u32;
    let ceiling = staff.max_weekly_hours();
    if weekly >= ceiling {
        report.push(Conflict::workload_exceeded(candidate, ceiling));
    }

    // Rule 4: per-day ceiling.
    let daily = check_daily_limit(staff, candidate.day, assignments, exclude_id);
    if !daily.can_add {
        report.push(Conflict::daily_limit_reached(daily.max_allowed));
    }

    report
}

/// Counts a staff member's assignments on one day against their per-day
/// ceiling.
pub fn check_daily_limit(
    staff: &Staff,
    day: Weekday,
    assignments: &[Assignment],
    exclude_id: Option<&str>,
) -> DailyLimit {
    let current_count = assignments
        .iter()
        .filter(|a| exclude_id != Some(a.id.as_str()))
        .filter(|a| a.staff_id == staff.id && a.day == day)
        .count() as u32;

    DailyLimit {
        current_count,
        max_allowed: staff.max_periods_per_day,
        can_add: current_count < staff.max_periods_per_day,
    }
}

/// Validates candidate shape against the plan before any store interaction.
///
/// Collects every problem (missing references, day or slot outside the
/// canonical lists) into one [`TimetableError::InvalidCandidate`].
pub fn validate_candidate(candidate: &AssignmentDraft, plan: &WeekPlan) -> Result<()> {
    let mut reasons = Vec::new();

    if candidate.staff_id.is_empty() {
        reasons.push("missing staff reference".to_string());
    }
    if candidate.subject_id.is_empty() {
        reasons.push("missing subject reference".to_string());
    }
    if let Some(classroom_id) = candidate.classroom_id.as_deref() {
        if classroom_id.is_empty() {
            reasons.push("empty classroom reference".to_string());
        }
    }
    if !plan.contains_day(candidate.day) {
        reasons.push(format!("day {} is not in the plan", candidate.day));
    }
    if !plan.contains_slot(&candidate.slot) {
        reasons.push(format!("slot {} is not in the plan", candidate.slot));
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(TimetableError::invalid(reasons))
    }
}
