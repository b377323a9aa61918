//! Monitor model and related types.
//!
//! This module defines the Monitor struct together with the staffing
//! category, account role, and role-capability types used across the
//! workflow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the staffing category a monitor is hired under.
///
/// Each category maps to a daily rate in the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorCategory {
    /// Senior counselor.
    SeniorCounselor,
    /// Counselor.
    Counselor,
    /// Monitor.
    Monitor,
    /// Junior monitor.
    JuniorMonitor,
    /// Intern (typically unpaid; the rate table carries a zero rate).
    Intern,
    /// Nurse.
    Nurse,
    /// Trainee nurse.
    TraineeNurse,
    /// Photographer, first tier.
    #[serde(rename = "photographer_1")]
    Photographer1,
    /// Photographer, second tier.
    #[serde(rename = "photographer_2")]
    Photographer2,
}

impl MonitorCategory {
    /// All categories, in rate-sheet order.
    pub const ALL: [MonitorCategory; 9] = [
        MonitorCategory::SeniorCounselor,
        MonitorCategory::Counselor,
        MonitorCategory::Monitor,
        MonitorCategory::JuniorMonitor,
        MonitorCategory::Intern,
        MonitorCategory::Nurse,
        MonitorCategory::TraineeNurse,
        MonitorCategory::Photographer1,
        MonitorCategory::Photographer2,
    ];
}

/// Represents the role of an account in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// System administrator.
    Admin,
    /// Camp manager: creates seasons, decides interests, edits teams.
    Manager,
    /// Monitor: proposes interest and responds to approvals.
    Monitor,
}

/// An action gated by account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffAction {
    /// Create or edit seasons and toggle their notification gate.
    ManageSeasons,
    /// Express interest in a season.
    ProposeInterest,
    /// Approve or reject an interest record.
    DecideInterest,
    /// Confirm or decline an approved interest.
    RespondToOffer,
    /// Bulk-edit a season's team assignments.
    EditTeam,
}

impl StaffRole {
    /// Returns true if this role may perform the given action.
    ///
    /// This is the single dispatch point for role-based permissions; there
    /// is no per-role handler hierarchy.
    pub fn permits(self, action: StaffAction) -> bool {
        match self {
            StaffRole::Admin => true,
            StaffRole::Manager => matches!(
                action,
                StaffAction::ManageSeasons
                    | StaffAction::DecideInterest
                    | StaffAction::EditTeam
            ),
            StaffRole::Monitor => matches!(
                action,
                StaffAction::ProposeInterest | StaffAction::RespondToOffer
            ),
        }
    }
}

/// Represents a monitor account as seen by the staffing workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    /// Unique identifier for the account.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Notification address; monitors without one are skipped in broadcasts.
    pub email: Option<String>,
    /// The account role.
    pub role: StaffRole,
    /// The staffing category the monitor is hired under.
    pub category: MonitorCategory,
    /// Whether a manager has approved this monitor for participation.
    pub approved: bool,
    /// Default supplemental-allowance class, if one has been assigned.
    pub allowance_class_id: Option<Uuid>,
}

impl Monitor {
    /// Creates a monitor-role account in the unapproved state.
    pub fn new(username: impl Into<String>, category: MonitorCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: None,
            role: StaffRole::Monitor,
            category,
            approved: false,
            allowance_class_id: None,
        }
    }

    /// Returns true if this account may participate in seasons: it must
    /// hold the monitor role and carry manager approval.
    pub fn can_participate(&self) -> bool {
        self.role == StaffRole::Monitor && self.approved
    }
}
