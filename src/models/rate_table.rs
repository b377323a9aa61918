//! Rate table model.
//!
//! A rate table holds one daily rate per staffing category plus a distinct
//! day-use rate. Tables are versioned by update timestamp; the newest one
//! is authoritative (the store picks it, callers pass it around
//! explicitly).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{MonitorCategory, SeasonCategory};

/// Daily rates per staffing category, with a separate day-use rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// When this table was last updated; newest table wins.
    pub updated_at: DateTime<Utc>,
    /// Daily rate for senior counselors.
    pub senior_counselor: Decimal,
    /// Daily rate for counselors.
    pub counselor: Decimal,
    /// Daily rate for monitors.
    pub monitor: Decimal,
    /// Daily rate for junior monitors.
    pub junior_monitor: Decimal,
    /// Daily rate for interns (usually zero).
    pub intern: Decimal,
    /// Daily rate for nurses.
    pub nurse: Decimal,
    /// Daily rate for trainee nurses.
    pub trainee_nurse: Decimal,
    /// Daily rate for first-tier photographers.
    pub photographer_1: Decimal,
    /// Daily rate for second-tier photographers.
    pub photographer_2: Decimal,
    /// Flat rate for day-use seasons, overriding every category rate.
    pub day_use: Decimal,
}

impl RateTable {
    /// Creates a table with all rates zeroed, timestamped `updated_at`.
    pub fn zeroed(updated_at: DateTime<Utc>) -> Self {
        Self {
            updated_at,
            senior_counselor: Decimal::ZERO,
            counselor: Decimal::ZERO,
            monitor: Decimal::ZERO,
            junior_monitor: Decimal::ZERO,
            intern: Decimal::ZERO,
            nurse: Decimal::ZERO,
            trainee_nurse: Decimal::ZERO,
            photographer_1: Decimal::ZERO,
            photographer_2: Decimal::ZERO,
            day_use: Decimal::ZERO,
        }
    }

    /// Returns the daily rate for a staffing category.
    pub fn rate_for(&self, category: MonitorCategory) -> Decimal {
        match category {
            MonitorCategory::SeniorCounselor => self.senior_counselor,
            MonitorCategory::Counselor => self.counselor,
            MonitorCategory::Monitor => self.monitor,
            MonitorCategory::JuniorMonitor => self.junior_monitor,
            MonitorCategory::Intern => self.intern,
            MonitorCategory::Nurse => self.nurse,
            MonitorCategory::TraineeNurse => self.trainee_nurse,
            MonitorCategory::Photographer1 => self.photographer_1,
            MonitorCategory::Photographer2 => self.photographer_2,
        }
    }

    /// Returns the daily rate for a monitor working a season of the given
    /// category. Day-use seasons always pay the day-use rate, regardless of
    /// the monitor's own category.
    pub fn daily_rate_for(
        &self,
        category: MonitorCategory,
        season_category: SeasonCategory,
    ) -> Decimal {
        if season_category == SeasonCategory::DayUse {
            self.day_use
        } else {
            self.rate_for(category)
        }
    }
}
