//! Team assignment and supplemental-allowance class models.
//!
//! A team assignment is the concrete staffing record created when an
//! interest is approved. It carries the pay-affecting benefit flags that
//! managers edit per season.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the status of a team assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Created on approval, awaiting confirmation.
    Pending,
    /// The monitor is confirmed on the team.
    Confirmed,
    /// The season is over and the assignment settled.
    Completed,
}

/// A named supplemental-allowance class with a fixed amount.
///
/// Names are unique; assignments reference a class by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceClass {
    /// Unique identifier for the class.
    pub id: Uuid,
    /// Unique class name (e.g. "allowance_1").
    pub name: String,
    /// Fixed amount paid on top of daily-rate pay.
    pub amount: Decimal,
}

impl AllowanceClass {
    /// Creates a new allowance class.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
        }
    }
}

/// A per-monitor, per-season staffing record with benefit flags.
///
/// At most one assignment exists per (season, monitor) pair; the store
/// enforces this with a unique index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The season this assignment belongs to.
    pub season_id: Uuid,
    /// The assigned monitor.
    pub monitor_id: Uuid,
    /// Current assignment status.
    pub status: AssignmentStatus,
    /// Whether the monitor receives a supplemental allowance.
    pub receives_allowance: bool,
    /// The allowance class the amount is read from, if any.
    pub allowance_class_id: Option<Uuid>,
    /// Whether the monitor receives special boarding pay.
    pub receives_boarding: bool,
    /// Boarding override amount; the sole source of the boarding value.
    pub boarding_amount: Option<Decimal>,
    /// Whether the monitor receives special deboarding pay.
    pub receives_deboarding: bool,
    /// Deboarding override amount; the sole source of the deboarding value.
    pub deboarding_amount: Option<Decimal>,
}

impl TeamAssignment {
    /// Creates a pending assignment with no benefits set.
    pub fn new(season_id: Uuid, monitor_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            season_id,
            monitor_id,
            status: AssignmentStatus::Pending,
            receives_allowance: false,
            allowance_class_id: None,
            receives_boarding: false,
            boarding_amount: None,
            receives_deboarding: false,
            deboarding_amount: None,
        }
    }
}
