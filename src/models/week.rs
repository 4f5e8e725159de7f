//! Week structure: days, slots, and the schedule plan.
//!
//! The plan is the single parameterization point for schedule granularity.
//! A [`Slot`] is an opaque ordered label — `"08:00-09:00"` for hour-interval
//! timetables, `"1"`..`"8"` for period-based ones. The engine only compares
//! labels and iterates the configured lists; it never parses a slot, so
//! either granularity (and either week length) is a matter of plan
//! construction, not of code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named weekday. Ordering follows the academic week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Canonical five-day teaching week.
    pub const FIVE_DAY: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Canonical six-day teaching week.
    pub const SIX_DAY: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// The day's canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic schedulable time unit, identified by its label.
///
/// Labels are opaque: `"08:00-09:00"` and `"3"` are equally valid. Order
/// comes from the [`WeekPlan`] slot list, not from the label content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(String);

impl Slot {
    /// Creates a slot from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Creates a period-style slot (`"1"`, `"2"`, ...).
    pub fn period(n: u32) -> Self {
        Self(n.to_string())
    }

    /// The slot label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Slot {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// The canonical ordered day and slot lists for a timetable.
///
/// Everything that iterates or validates schedule coordinates goes through
/// the plan: candidate validation, the weekly grid, and the auto-scheduler.
///
/// # Example
///
/// ```
/// use timetable_core::models::{WeekPlan, Weekday};
///
/// let plan = WeekPlan::default(); // Mon-Fri, 08:00-17:00 hour slots
/// assert_eq!(plan.days().len(), 5);
/// assert_eq!(plan.slots().len(), 9);
/// assert!(plan.contains_day(Weekday::Friday));
/// assert!(!plan.contains_day(Weekday::Saturday));
///
/// let periods = WeekPlan::new(Weekday::SIX_DAY.to_vec(), WeekPlan::period_slots(8));
/// assert_eq!(periods.slots()[0].as_str(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    days: Vec<Weekday>,
    slots: Vec<Slot>,
}

impl WeekPlan {
    /// Creates a plan from explicit day and slot lists.
    pub fn new(days: Vec<Weekday>, slots: Vec<Slot>) -> Self {
        Self { days, slots }
    }

    /// Builds hour-interval slot labels: `start:00-(start+1):00`, `count` of them.
    pub fn hour_slots(start_hour: u32, count: u32) -> Vec<Slot> {
        (0..count)
            .map(|i| {
                let from = start_hour + i;
                Slot::new(format!("{:02}:00-{:02}:00", from, from + 1))
            })
            .collect()
    }

    /// Builds integer-period slot labels `"1"`..`count`.
    pub fn period_slots(count: u32) -> Vec<Slot> {
        (1..=count).map(Slot::period).collect()
    }

    /// Ordered day list.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Ordered slot list.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Whether a day belongs to the plan.
    pub fn contains_day(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Whether a slot belongs to the plan.
    pub fn contains_slot(&self, slot: &Slot) -> bool {
        self.slots.contains(slot)
    }

    /// Position of a day in the plan.
    pub fn day_index(&self, day: Weekday) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }

    /// Position of a slot in the plan.
    pub fn slot_index(&self, slot: &Slot) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }

    /// Total cell count (days × slots).
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.slots.len()
    }
}

impl Default for WeekPlan {
    /// Five-day week with the nine hour slots 08:00-17:00.
    fn default() -> Self {
        Self::new(Weekday::FIVE_DAY.to_vec(), Self::hour_slots(8, 9))
    }
}
