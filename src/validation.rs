//! Input validation for timetable data sets.
//!
//! Checks structural integrity of staff, subjects, classrooms, and
//! assignments before scheduling or projection. Detects:
//! - Duplicate IDs
//! - Duplicate subject codes
//! - Assignments referencing unknown staff/subjects/classrooms
//! - Assignments with a day or slot outside the plan

use std::collections::HashSet;

use crate::models::{Assignment, Classroom, Staff, Subject, WeekPlan};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// Two subjects share the same code.
    DuplicateCode,
    /// An assignment references a staff member that doesn't exist.
    UnknownStaff,
    /// An assignment references a subject that doesn't exist.
    UnknownSubject,
    /// An assignment references a classroom that doesn't exist.
    UnknownClassroom,
    /// An assignment's day or slot is outside the plan.
    OutOfPlan,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a full timetable data set.
///
/// Checks:
/// 1. No duplicate staff, subject, classroom, or assignment IDs
/// 2. No duplicate subject codes
/// 3. Every assignment references an existing staff member and subject
/// 4. Every booked classroom exists
/// 5. Every assignment's day and slot belong to the plan
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_dataset(
    staff: &[Staff],
    subjects: &[Subject],
    classrooms: &[Classroom],
    assignments: &[Assignment],
    plan: &WeekPlan,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut staff_ids = HashSet::new();
    for s in staff {
        if !staff_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate staff ID: {}", s.id),
            ));
        }
    }

    let mut subject_ids = HashSet::new();
    let mut subject_codes = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate subject ID: {}", s.id),
            ));
        }
        if !subject_codes.insert(s.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("duplicate subject code: {}", s.code),
            ));
        }
    }

    let mut classroom_ids = HashSet::new();
    for c in classrooms {
        if !classroom_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate classroom ID: {}", c.id),
            ));
        }
    }

    let mut assignment_ids = HashSet::new();
    for a in assignments {
        if !assignment_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate assignment ID: {}", a.id),
            ));
        }

        if !staff_ids.contains(a.staff_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStaff,
                format!("assignment '{}' references unknown staff '{}'", a.id, a.staff_id),
            ));
        }
        if !subject_ids.contains(a.subject_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSubject,
                format!(
                    "assignment '{}' references unknown subject '{}'",
                    a.id, a.subject_id
                ),
            ));
        }
        if let Some(classroom_id) = a.classroom_id.as_deref() {
            if !classroom_ids.contains(classroom_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownClassroom,
                    format!(
                        "assignment '{}' references unknown classroom '{classroom_id}'",
                        a.id
                    ),
                ));
            }
        }

        if !plan.contains_day(a.day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfPlan,
                format!("assignment '{}' day {} is not in the plan", a.id, a.day),
            ));
        }
        if !plan.contains_slot(&a.slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfPlan,
                format!("assignment '{}' slot {} is not in the plan", a.id, a.slot),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
