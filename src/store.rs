//! Entity store boundary.
//!
//! The engine consumes persistence through the [`EntityStore`] trait:
//! point lookups by id and the indexed assignment queries the constraint
//! checks are built on. [`MemoryStore`] is the in-memory reference
//! implementation, used by tests and embeddable as-is.
//!
//! # Concurrency contract
//!
//! The pre-write conflict check runs over a snapshot; between that read
//! and the insert a concurrent writer may claim the same key. The store
//! is the last line of defense: [`EntityStore::insert_assignment`]
//! enforces the (staff, day, slot) and (classroom, day, slot) uniqueness
//! invariants and fails with [`TimetableError::WriteRace`] when a racing
//! insert got there first. No locks or retries here; the caller may
//! re-query and retry at its discretion.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{Result, TimetableError};
use crate::models::{
    Assignment, AssignmentDraft, Classroom, Semester, Slot, Staff, Subject, Weekday,
};

/// Read/write access to timetable entities.
pub trait EntityStore {
    /// Point lookup of a staff record.
    fn staff_by_id(&self, id: &str) -> Option<Staff>;

    /// Point lookup of a subject record.
    fn subject_by_id(&self, id: &str) -> Option<Subject>;

    /// Point lookup of a classroom record.
    fn classroom_by_id(&self, id: &str) -> Option<Classroom>;

    /// All active staff.
    fn list_staff(&self) -> Vec<Staff>;

    /// All active subjects.
    fn list_subjects(&self) -> Vec<Subject>;

    /// Snapshot of every assignment.
    fn assignments(&self) -> Vec<Assignment>;

    /// Assignments held by one staff member on one day.
    fn assignments_by_staff_day(&self, staff_id: &str, day: Weekday) -> Vec<Assignment>;

    /// Assignments held by one staff member in one department+semester.
    fn assignments_by_staff_department_semester(
        &self,
        staff_id: &str,
        department: &str,
        semester: Semester,
    ) -> Vec<Assignment>;

    /// The assignment occupying one (classroom, day, slot) key, if any.
    fn assignment_by_classroom_day_slot(
        &self,
        classroom_id: &str,
        day: Weekday,
        slot: &Slot,
    ) -> Option<Assignment>;

    /// Persists a draft, allocating an id.
    ///
    /// # Errors
    /// [`TimetableError::WriteRace`] if the draft's (staff, day, slot) or
    /// (classroom, day, slot) key is already taken.
    fn insert_assignment(&mut self, draft: &AssignmentDraft, created_by: &str) -> Result<String>;

    /// Deletes an assignment by id.
    ///
    /// # Errors
    /// [`TimetableError::AssignmentNotFound`] for an unknown id.
    fn delete_assignment(&mut self, id: &str) -> Result<()>;
}

/// In-memory reference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    staff: HashMap<String, Staff>,
    subjects: HashMap<String, Subject>,
    classrooms: HashMap<String, Classroom>,
    assignments: Vec<Assignment>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a staff record.
    pub fn with_staff(mut self, staff: Staff) -> Self {
        self.add_staff(staff);
        self
    }

    /// Adds a subject record.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.add_subject(subject);
        self
    }

    /// Adds a classroom record.
    pub fn with_classroom(mut self, classroom: Classroom) -> Self {
        self.add_classroom(classroom);
        self
    }

    /// Adds a staff record.
    pub fn add_staff(&mut self, staff: Staff) {
        self.staff.insert(staff.id.clone(), staff);
    }

    /// Adds a subject record.
    pub fn add_subject(&mut self, subject: Subject) {
        self.subjects.insert(subject.id.clone(), subject);
    }

    /// Adds a classroom record.
    pub fn add_classroom(&mut self, classroom: Classroom) {
        self.classrooms.insert(classroom.id.clone(), classroom);
    }
}

impl EntityStore for MemoryStore {
    fn staff_by_id(&self, id: &str) -> Option<Staff> {
        self.staff.get(id).cloned()
    }

    fn subject_by_id(&self, id: &str) -> Option<Subject> {
        self.subjects.get(id).cloned()
    }

    fn classroom_by_id(&self, id: &str) -> Option<Classroom> {
        self.classrooms.get(id).cloned()
    }

    fn list_staff(&self) -> Vec<Staff> {
        let mut out: Vec<Staff> = self.staff.values().filter(|s| s.is_active).cloned().collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    fn list_subjects(&self) -> Vec<Subject> {
        let mut out: Vec<Subject> = self
            .subjects
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    fn assignments(&self) -> Vec<Assignment> {
        self.assignments.clone()
    }

    fn assignments_by_staff_day(&self, staff_id: &str, day: Weekday) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.staff_id == staff_id && a.day == day)
            .cloned()
            .collect()
    }

    fn assignments_by_staff_department_semester(
        &self,
        staff_id: &str,
        department: &str,
        semester: Semester,
    ) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|a| {
                a.staff_id == staff_id && a.department == department && a.semester == semester
            })
            .cloned()
            .collect()
    }

    fn assignment_by_classroom_day_slot(
        &self,
        classroom_id: &str,
        day: Weekday,
        slot: &Slot,
    ) -> Option<Assignment> {
        self.assignments
            .iter()
            .find(|a| a.occupies_classroom_slot(classroom_id, day, slot))
            .cloned()
    }

    fn insert_assignment(&mut self, draft: &AssignmentDraft, created_by: &str) -> Result<String> {
        // Uniqueness invariants: last line of defense against the
        // read-check-write race.
        if self
            .assignments
            .iter()
            .any(|a| a.occupies_staff_slot(&draft.staff_id, draft.day, &draft.slot))
        {
            let key = format!("staff {} / {} / {}", draft.staff_id, draft.day, draft.slot);
            warn!(%key, "insert rejected: staff slot already taken");
            return Err(TimetableError::WriteRace { key });
        }
        if let Some(classroom_id) = draft.classroom_id.as_deref() {
            if self
                .assignments
                .iter()
                .any(|a| a.occupies_classroom_slot(classroom_id, draft.day, &draft.slot))
            {
                let key = format!("classroom {classroom_id} / {} / {}", draft.day, draft.slot);
                warn!(%key, "insert rejected: classroom slot already taken");
                return Err(TimetableError::WriteRace { key });
            }
        }

        self.next_id += 1;
        let id = format!("a{}", self.next_id);
        self.assignments
            .push(draft.clone().into_assignment(id.clone(), created_by));
        Ok(id)
    }

    fn delete_assignment(&mut self, id: &str) -> Result<()> {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.id != id);
        if self.assignments.len() == before {
            return Err(TimetableError::AssignmentNotFound(id.to_string()));
        }
        Ok(())
    }
}
