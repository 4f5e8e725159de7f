//! Subject model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A subject (course unit) to be placed on the timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Unique subject code (e.g. "CS301").
    pub code: String,
    /// Credit count.
    pub credits: u32,
    /// Which semester parity the subject runs in.
    pub semester: Semester,
    /// Owning department.
    pub department: String,
    /// Theory or lab.
    pub kind: SubjectKind,
    /// Soft-deletion flag.
    pub is_active: bool,
}

/// Semester parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    Odd,
    Even,
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Semester::Odd => f.write_str("odd"),
            Semester::Even => f.write_str("even"),
        }
    }
}

/// Subject kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Theory,
    Lab,
}

impl Subject {
    /// Creates an active theory subject.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: code.into(),
            credits: 0,
            semester: Semester::Odd,
            department: String::new(),
            kind: SubjectKind::Theory,
            is_active: true,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit count.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the semester parity.
    pub fn with_semester(mut self, semester: Semester) -> Self {
        self.semester = semester;
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the subject kind.
    pub fn with_kind(mut self, kind: SubjectKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the record inactive (soft delete).
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}
