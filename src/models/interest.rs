//! Interest record and its status machine.
//!
//! An interest is a monitor's expressed wish to work a season. It moves
//! through a two-party handshake: the manager decides (approve/reject) and,
//! on approval, the monitor responds (confirm/decline). The store enforces
//! at most one record per (monitor, season) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Represents the status of an interest record.
///
/// Valid transitions: `Interested` → `Approved`/`Rejected` (manager),
/// `Approved` → `Confirmed`/`Recused` (owning monitor). `Rejected`,
/// `Confirmed`, and `Recused` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestStatus {
    /// Submitted, awaiting a manager decision.
    Interested,
    /// Approved by a manager; an offer awaiting the monitor's response.
    Approved,
    /// Rejected by a manager. Never resurrected.
    Rejected,
    /// Offer accepted by the monitor.
    Confirmed,
    /// Offer declined by the monitor.
    Recused,
}

impl InterestStatus {
    /// Returns true if no further transition is allowed from this status.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            InterestStatus::Rejected | InterestStatus::Confirmed | InterestStatus::Recused
        )
    }

    /// The snake_case label used in logs, errors, and the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            InterestStatus::Interested => "interested",
            InterestStatus::Approved => "approved",
            InterestStatus::Rejected => "rejected",
            InterestStatus::Confirmed => "confirmed",
            InterestStatus::Recused => "recused",
        }
    }
}

impl fmt::Display for InterestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monitor's expressed interest in working a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The monitor who expressed interest.
    pub monitor_id: Uuid,
    /// The season the interest is for.
    pub season_id: Uuid,
    /// Current workflow status.
    pub status: InterestStatus,
    /// When the interest was first expressed.
    pub created_at: DateTime<Utc>,
}

impl Interest {
    /// Creates a new interest record in the initial `Interested` state.
    pub fn new(monitor_id: Uuid, season_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            monitor_id,
            season_id,
            status: InterestStatus::Interested,
            created_at,
        }
    }
}
