//! Greedy auto-scheduling and workload KPIs.
//!
//! `GreedyScheduler` fills a timetable with a single-pass, first-fit
//! heuristic: fast, deterministic under its ordering parameters, and
//! explicitly not optimal. `WorkloadKpi` computes staff load metrics
//! against the role-derived ceilings.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! (priority dispatching)

mod greedy;
mod workload;

pub use greedy::{auto_schedule, GreedyScheduler, StaffOrder, SubjectOrder};
pub use workload::WorkloadKpi;
