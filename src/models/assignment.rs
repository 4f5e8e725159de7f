//! Assignment model.
//!
//! An assignment pins (staff, subject, day, slot) — optionally with a
//! classroom — into the timetable. It is the only entity with
//! cross-references; staff, subjects and classrooms are referenced by id,
//! never owned. Records are immutable once created: an edit is modeled
//! upstream as remove + recreate.
//!
//! # Invariants
//!
//! For a fixed (staff, day, slot) at most one assignment exists, and the
//! same for (classroom, day, slot). The constraint checker rejects
//! violations before the write; the store enforces them at the write.

use serde::{Deserialize, Serialize};

use super::{Semester, Slot, Weekday};

/// A persisted timetable assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Assigned staff member.
    pub staff_id: String,
    /// Taught subject.
    pub subject_id: String,
    /// Booked classroom, if one was chosen.
    pub classroom_id: Option<String>,
    /// Department the assignment counts against.
    pub department: String,
    /// Semester parity the assignment counts against.
    pub semester: Semester,
    /// Day of week.
    pub day: Weekday,
    /// Time slot.
    pub slot: Slot,
    /// Admin user who created the record.
    pub created_by: String,
}

/// A candidate assignment: everything but the store-allocated `id` and
/// the `created_by` stamp.
///
/// This is what the constraint checker admits or rejects and what the
/// auto-scheduler proposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDraft {
    /// Staff member to assign.
    pub staff_id: String,
    /// Subject to teach.
    pub subject_id: String,
    /// Classroom to book, if any.
    pub classroom_id: Option<String>,
    /// Department the assignment counts against.
    pub department: String,
    /// Semester parity the assignment counts against.
    pub semester: Semester,
    /// Day of week.
    pub day: Weekday,
    /// Time slot.
    pub slot: Slot,
}

impl AssignmentDraft {
    /// Creates a draft with no classroom, empty department, odd semester.
    pub fn new(
        staff_id: impl Into<String>,
        subject_id: impl Into<String>,
        day: Weekday,
        slot: Slot,
    ) -> Self {
        Self {
            staff_id: staff_id.into(),
            subject_id: subject_id.into(),
            classroom_id: None,
            department: String::new(),
            semester: Semester::Odd,
            day,
            slot,
        }
    }

    /// Sets the classroom to book.
    pub fn with_classroom(mut self, classroom_id: impl Into<String>) -> Self {
        self.classroom_id = Some(classroom_id.into());
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the semester parity.
    pub fn with_semester(mut self, semester: Semester) -> Self {
        self.semester = semester;
        self
    }

    /// Promotes the draft into a persisted record.
    pub fn into_assignment(
        self,
        id: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Assignment {
        Assignment {
            id: id.into(),
            staff_id: self.staff_id,
            subject_id: self.subject_id,
            classroom_id: self.classroom_id,
            department: self.department,
            semester: self.semester,
            day: self.day,
            slot: self.slot,
            created_by: created_by.into(),
        }
    }
}

impl Assignment {
    /// Whether this record occupies the given (staff, day, slot) key.
    pub fn occupies_staff_slot(&self, staff_id: &str, day: Weekday, slot: &Slot) -> bool {
        self.staff_id == staff_id && self.day == day && self.slot == *slot
    }

    /// Whether this record occupies the given (classroom, day, slot) key.
    pub fn occupies_classroom_slot(&self, classroom_id: &str, day: Weekday, slot: &Slot) -> bool {
        self.classroom_id.as_deref() == Some(classroom_id) && self.day == day && self.slot == *slot
    }
}
