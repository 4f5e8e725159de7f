//! Staff workload metrics.
//!
//! Computes how loaded a staff member is relative to the role-derived
//! weekly ceiling, plus the per-day distribution of their assignments.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Current hours | Assignment count in one department+semester (1 assignment = 1 hour) |
//! | Remaining hours | Ceiling minus current, floored at zero |
//! | Utilization | current / ceiling, as a rounded percentage |
//! | Daily counts | Assignments per plan day, across all departments |
//! | Average per day | Total assignments / plan day count |

use std::collections::HashMap;

use crate::models::{Assignment, Semester, Staff, WeekPlan, Weekday};

/// Workload indicators for one staff member.
#[derive(Debug, Clone)]
pub struct WorkloadKpi {
    /// Assignments counted against the department+semester ceiling.
    pub current_hours: u32,
    /// The role-derived weekly hour ceiling.
    pub max_hours: u32,
    /// Hours left under the ceiling (never negative).
    pub remaining_hours: u32,
    /// Ceiling usage as a rounded percentage.
    pub utilization_pct: u32,
    /// Assignment count per plan day, across all departments and semesters.
    pub daily_counts: HashMap<Weekday, u32>,
    /// Mean assignments per plan day.
    pub average_per_day: f64,
}

impl WorkloadKpi {
    /// Computes workload indicators from an assignment snapshot.
    ///
    /// `current_hours` counts only assignments in the given department and
    /// semester (the ceiling's scope); the daily distribution counts every
    /// assignment the staff member holds.
    pub fn calculate(
        staff: &Staff,
        department: &str,
        semester: Semester,
        assignments: &[Assignment],
        plan: &WeekPlan,
    ) -> Self {
        let mine: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.staff_id == staff.id)
            .collect();

        let current_hours = mine
            .iter()
            .filter(|a| a.department == department && a.semester == semester)
            .count() as u32;

        let max_hours = staff.max_weekly_hours();
        let remaining_hours = max_hours.saturating_sub(current_hours);
        let utilization_pct = if max_hours == 0 {
            0
        } else {
            ((current_hours as f64 / max_hours as f64) * 100.0).round() as u32
        };

        let mut daily_counts: HashMap<Weekday, u32> = HashMap::new();
        for &day in plan.days() {
            let count = mine.iter().filter(|a| a.day == day).count() as u32;
            daily_counts.insert(day, count);
        }

        let average_per_day = if plan.days().is_empty() {
            0.0
        } else {
            mine.len() as f64 / plan.days().len() as f64
        };

        Self {
            current_hours,
            max_hours,
            remaining_hours,
            utilization_pct,
            daily_counts,
            average_per_day,
        }
    }

    /// Whether the ceiling leaves room for one more assignment.
    pub fn can_take_more(&self) -> bool {
        self.current_hours < self.max_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignmentDraft, Slot, StaffRole};

    fn professor(id: &str) -> Staff {
        Staff::new(id, StaffRole::Professor)
    }

    fn assignment(
        id: &str,
        staff_id: &str,
        department: &str,
        semester: Semester,
        day: Weekday,
        slot: &str,
    ) -> Assignment {
        AssignmentDraft::new(staff_id, "sub", day, Slot::new(slot))
            .with_department(department)
            .with_semester(semester)
            .into_assignment(id, "admin")
    }

    #[test]
    fn test_workload_basic() {
        let staff = professor("s1");
        let plan = WeekPlan::default();
        let assignments = vec![
            assignment("a1", "s1", "CSE", Semester::Odd, Weekday::Monday, "08:00-09:00"),
            assignment("a2", "s1", "CSE", Semester::Odd, Weekday::Monday, "09:00-10:00"),
            assignment("a3", "s1", "CSE", Semester::Odd, Weekday::Tuesday, "08:00-09:00"),
        ];

        let kpi = WorkloadKpi::calculate(&staff, "CSE", Semester::Odd, &assignments, &plan);
        assert_eq!(kpi.current_hours, 3);
        assert_eq!(kpi.max_hours, 12);
        assert_eq!(kpi.remaining_hours, 9);
        assert_eq!(kpi.utilization_pct, 25);
        assert!(kpi.can_take_more());
    }

    #[test]
    fn test_ceiling_scope_is_department_and_semester() {
        let staff = professor("s1");
        let plan = WeekPlan::default();
        let assignments = vec![
            assignment("a1", "s1", "CSE", Semester::Odd, Weekday::Monday, "08:00-09:00"),
            assignment("a2", "s1", "ECE", Semester::Odd, Weekday::Monday, "09:00-10:00"),
            assignment("a3", "s1", "CSE", Semester::Even, Weekday::Tuesday, "08:00-09:00"),
        ];

        let kpi = WorkloadKpi::calculate(&staff, "CSE", Semester::Odd, &assignments, &plan);
        assert_eq!(kpi.current_hours, 1);
        // Daily distribution still covers everything the staff member holds.
        assert_eq!(kpi.daily_counts[&Weekday::Monday], 2);
        assert_eq!(kpi.daily_counts[&Weekday::Tuesday], 1);
    }

    #[test]
    fn test_other_staff_ignored() {
        let staff = professor("s1");
        let plan = WeekPlan::default();
        let assignments = vec![assignment(
            "a1",
            "s2",
            "CSE",
            Semester::Odd,
            Weekday::Monday,
            "08:00-09:00",
        )];

        let kpi = WorkloadKpi::calculate(&staff, "CSE", Semester::Odd, &assignments, &plan);
        assert_eq!(kpi.current_hours, 0);
        assert_eq!(kpi.daily_counts[&Weekday::Monday], 0);
    }

    #[test]
    fn test_at_ceiling() {
        let staff = professor("s1");
        let plan = WeekPlan::default();
        let assignments: Vec<Assignment> = (0..12)
            .map(|i| {
                assignment(
                    &format!("a{i}"),
                    "s1",
                    "CSE",
                    Semester::Odd,
                    Weekday::FIVE_DAY[i % 5],
                    &format!("{:02}:00-{:02}:00", 8 + (i / 5), 9 + (i / 5)),
                )
            })
            .collect();

        let kpi = WorkloadKpi::calculate(&staff, "CSE", Semester::Odd, &assignments, &plan);
        assert_eq!(kpi.current_hours, 12);
        assert_eq!(kpi.remaining_hours, 0);
        assert_eq!(kpi.utilization_pct, 100);
        assert!(!kpi.can_take_more());
    }

    #[test]
    fn test_average_per_day() {
        let staff = professor("s1");
        let plan = WeekPlan::default(); // 5 days
        let assignments = vec![
            assignment("a1", "s1", "CSE", Semester::Odd, Weekday::Monday, "08:00-09:00"),
            assignment("a2", "s1", "CSE", Semester::Odd, Weekday::Friday, "08:00-09:00"),
        ];

        let kpi = WorkloadKpi::calculate(&staff, "CSE", Semester::Odd, &assignments, &plan);
        assert!((kpi.average_per_day - 0.4).abs() < 1e-10);
    }
}
