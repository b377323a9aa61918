//! Core data models for the camp staffing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assignment;
mod interest;
mod monitor;
mod pay_report;
mod rate_table;
mod season;

pub use assignment::{AllowanceClass, AssignmentStatus, TeamAssignment};
pub use interest::{Interest, InterestStatus};
pub use monitor::{Monitor, MonitorCategory, StaffAction, StaffRole};
pub use pay_report::PayBreakdown;
pub use rate_table::RateTable;
pub use season::{Season, SeasonCategory, SeasonDraft, normalize_paid_days};
