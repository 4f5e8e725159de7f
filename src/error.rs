//! Error types for timetable-core.
//!
//! Conflicts are deliberately NOT errors: a [`crate::conflict::ConflictReport`]
//! is plain data the caller shows to a human. Errors here are the fatal
//! cases — malformed candidates, missing referenced records, and write
//! races at the store layer.

use thiserror::Error;

/// Main error type for timetable operations.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// Candidate assignment is malformed (missing reference, day or slot
    /// outside the configured plan). Rejected before any store interaction.
    #[error("invalid candidate: {}", reasons.join("; "))]
    InvalidCandidate {
        /// Every problem found, not just the first.
        reasons: Vec<String>,
    },

    /// Referenced staff record does not exist. The workload check cannot
    /// proceed without it.
    #[error("staff not found: {0}")]
    StaffNotFound(String),

    /// Referenced subject record does not exist.
    #[error("subject not found: {0}")]
    SubjectNotFound(String),

    /// Referenced classroom record does not exist.
    #[error("classroom not found: {0}")]
    ClassroomNotFound(String),

    /// Assignment record does not exist (e.g. delete of an unknown id).
    #[error("assignment not found: {0}")]
    AssignmentNotFound(String),

    /// A store uniqueness invariant was violated at insert time despite a
    /// clean pre-check. The caller should re-fetch and may retry.
    #[error("write race: an assignment already occupies {key}")]
    WriteRace {
        /// The colliding key, e.g. `staff s1 / Monday / 09:00-10:00`.
        key: String,
    },
}

impl TimetableError {
    /// Creates an `InvalidCandidate` from accumulated reasons.
    pub fn invalid(reasons: Vec<String>) -> Self {
        Self::InvalidCandidate { reasons }
    }
}

/// Result type alias for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;
