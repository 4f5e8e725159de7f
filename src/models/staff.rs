//! Staff model.
//!
//! Staff members are the assignable teaching resources. Each carries a
//! role classification from which the weekly hour ceiling is derived, and
//! a per-day period ceiling for daily-limit checks.
//!
//! # Workload Ceilings
//!
//! | Role | Weekly hours |
//! |------|-------------|
//! | Assistant Professor | 18 |
//! | Professor | 12 |
//!
//! The weekly ceiling is a function of the role and is never stored,
//! so the two can't drift apart.

use serde::{Deserialize, Serialize};

/// Default per-day period ceiling: the full canonical period count.
pub const DEFAULT_MAX_PERIODS_PER_DAY: u32 = 8;

/// A staff member who can be assigned to teach subjects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    /// Unique staff identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Home department.
    pub department: String,
    /// Role classification; determines the weekly hour ceiling.
    pub role: StaffRole,
    /// Maximum assignments on any single day.
    pub max_periods_per_day: u32,
    /// Soft-deletion flag; inactive staff are never scheduled.
    pub is_active: bool,
}

/// Staff role classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    /// Lower-seniority role with the higher teaching load.
    #[serde(rename = "Assistant Professor")]
    AssistantProfessor,
    /// Higher-seniority role with the lower teaching load.
    Professor,
}

impl StaffRole {
    /// Weekly hour ceiling for this role (one assignment = one hour).
    pub fn weekly_hour_ceiling(&self) -> u32 {
        match self {
            StaffRole::AssistantProfessor => 18,
            StaffRole::Professor => 12,
        }
    }
}

impl Staff {
    /// Creates an active staff member with the default daily ceiling.
    pub fn new(id: impl Into<String>, role: StaffRole) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            department: String::new(),
            role,
            max_periods_per_day: DEFAULT_MAX_PERIODS_PER_DAY,
            is_active: true,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the per-day assignment ceiling.
    pub fn with_max_periods_per_day(mut self, max: u32) -> Self {
        self.max_periods_per_day = max;
        self
    }

    /// Marks the record inactive (soft delete).
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Weekly hour ceiling, derived from the role.
    pub fn max_weekly_hours(&self) -> u32 {
        self.role.weekly_hour_ceiling()
    }
}
