//! Plan configuration.
//!
//! Loads the week/slot parameterization from TOML so deployments can
//! switch week length and slot granularity without code changes.
//!
//! # Examples
//!
//! Hour-interval slots:
//!
//! ```
//! use timetable_core::config::PlanConfig;
//!
//! let config = PlanConfig::from_toml_str(r#"
//!     days = 5
//!
//!     [slots]
//!     kind = "hours"
//!     start_hour = 8
//!     count = 9
//! "#).unwrap();
//!
//! let plan = config.into_plan().unwrap();
//! assert_eq!(plan.slots()[0].as_str(), "08:00-09:00");
//! ```
//!
//! Integer periods on a six-day week:
//!
//! ```
//! use timetable_core::config::PlanConfig;
//!
//! let config = PlanConfig::from_toml_str(r#"
//!     days = 6
//!
//!     [slots]
//!     kind = "periods"
//!     count = 8
//! "#).unwrap();
//!
//! let plan = config.into_plan().unwrap();
//! assert_eq!(plan.days().len(), 6);
//! assert_eq!(plan.slots().last().unwrap().as_str(), "8");
//! ```
//!
//! Use the default plan when no file exists:
//!
//! ```no_run
//! use timetable_core::config::PlanConfig;
//!
//! let plan = PlanConfig::load("timetable.toml")
//!     .and_then(PlanConfig::into_plan)
//!     .unwrap_or_default();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Slot, WeekPlan, Weekday};

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// TOML-loadable week/slot plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Teaching days per week: 5 (Mon-Fri) or 6 (Mon-Sat).
    #[serde(default = "default_days")]
    pub days: u8,
    /// Slot granularity.
    #[serde(default)]
    pub slots: SlotConfig,
}

/// Slot granularity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotConfig {
    /// Hour intervals `start_hour:00-(start_hour+1):00`, `count` of them.
    Hours { start_hour: u32, count: u32 },
    /// Integer periods `1..=count`.
    Periods { count: u32 },
    /// Explicit slot labels, in order.
    Labels { labels: Vec<String> },
}

fn default_days() -> u8 {
    5
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::Hours {
            start_hour: 8,
            count: 9,
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            slots: SlotConfig::default(),
        }
    }
}

impl PlanConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Resolves the configuration into a [`WeekPlan`].
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] for unsupported week lengths, zero slot
    /// counts, or empty/duplicate labels.
    pub fn into_plan(self) -> Result<WeekPlan, ConfigError> {
        let days = match self.days {
            5 => Weekday::FIVE_DAY.to_vec(),
            6 => Weekday::SIX_DAY.to_vec(),
            other => {
                return Err(ConfigError::Invalid(format!(
                    "unsupported week length: {other} (expected 5 or 6)"
                )))
            }
        };

        let slots = match self.slots {
            SlotConfig::Hours { start_hour, count } => {
                if count == 0 {
                    return Err(ConfigError::Invalid("slot count must be positive".into()));
                }
                if start_hour + count > 24 {
                    return Err(ConfigError::Invalid(format!(
                        "hour slots {start_hour}+{count} run past midnight"
                    )));
                }
                WeekPlan::hour_slots(start_hour, count)
            }
            SlotConfig::Periods { count } => {
                if count == 0 {
                    return Err(ConfigError::Invalid("slot count must be positive".into()));
                }
                WeekPlan::period_slots(count)
            }
            SlotConfig::Labels { labels } => {
                if labels.is_empty() {
                    return Err(ConfigError::Invalid("slot labels must not be empty".into()));
                }
                let mut seen = std::collections::HashSet::new();
                for label in &labels {
                    if !seen.insert(label.as_str()) {
                        return Err(ConfigError::Invalid(format!(
                            "duplicate slot label: {label}"
                        )));
                    }
                }
                labels.into_iter().map(Slot::new).collect()
            }
        };

        Ok(WeekPlan::new(days, slots))
    }
}
