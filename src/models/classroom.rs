//! Classroom model.

use serde::{Deserialize, Serialize};

/// A bookable room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Display name (e.g. "LH-2").
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Room kind.
    pub kind: ClassroomKind,
    /// Optional department affinity; `None` = shared room.
    pub department: Option<String>,
    /// Soft-deletion flag.
    pub is_active: bool,
}

/// Classroom kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassroomKind {
    LectureHall,
    Lab,
    SeminarRoom,
}

impl Classroom {
    /// Creates an active lecture hall.
    pub fn new(id: impl Into<String>, kind: ClassroomKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            kind,
            department: None,
            is_active: true,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the department affinity.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Marks the record inactive (soft delete).
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_builder() {
        let c = Classroom::new("c1", ClassroomKind::Lab)
            .with_name("CS Lab 1")
            .with_capacity(30)
            .with_department("CSE");

        assert_eq!(c.id, "c1");
        assert_eq!(c.capacity, 30);
        assert_eq!(c.department.as_deref(), Some("CSE"));
        assert!(c.is_active);
    }

    #[test]
    fn test_kind_serde_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ClassroomKind::LectureHall).unwrap(),
            "\"lecture_hall\""
        );
        assert_eq!(
            serde_json::to_string(&ClassroomKind::SeminarRoom).unwrap(),
            "\"seminar_room\""
        );
    }
}
