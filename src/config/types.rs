//! Configuration types for the staffing system.
//!
//! These structures are deserialized from YAML seed files and turned into
//! store records at startup.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// The rates file structure (`rates.yaml`).
///
/// One daily rate per staffing category plus the day-use rate, versioned
/// by update timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// When this table was established; the newest table wins.
    pub updated_at: DateTime<Utc>,
    /// Daily rate for senior counselors.
    pub senior_counselor: Decimal,
    /// Daily rate for counselors.
    pub counselor: Decimal,
    /// Daily rate for monitors.
    pub monitor: Decimal,
    /// Daily rate for junior monitors.
    pub junior_monitor: Decimal,
    /// Daily rate for interns.
    pub intern: Decimal,
    /// Daily rate for nurses.
    pub nurse: Decimal,
    /// Daily rate for trainee nurses.
    pub trainee_nurse: Decimal,
    /// Daily rate for first-tier photographers.
    pub photographer_1: Decimal,
    /// Daily rate for second-tier photographers.
    pub photographer_2: Decimal,
    /// Flat rate for day-use seasons.
    pub day_use: Decimal,
}

/// One allowance class entry in `allowances.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceEntry {
    /// The class name; unique among classes.
    pub name: String,
    /// The fixed supplemental amount.
    pub amount: Decimal,
}

/// The allowances file structure (`allowances.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct AllowancesConfig {
    /// The configured allowance classes.
    pub classes: Vec<AllowanceEntry>,
}
