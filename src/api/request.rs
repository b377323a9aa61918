//! Request types for the staffing API.
//!
//! Season create and edit requests reuse [`SeasonDraft`] directly; the
//! draft already is the set of manager-editable fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workflow::{AssignmentEdit, Decision, OfferResponse};

/// Body of `POST /interests`: a monitor proposing themselves for a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRequest {
    /// The proposing monitor.
    pub monitor_id: Uuid,
    /// The season the monitor wants to work.
    pub season_id: Uuid,
}

/// Body of `POST /interests/:id/decision`: a manager ruling on an interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Approve or reject.
    pub decision: Decision,
}

/// Body of `POST /interests/:id/response`: a monitor answering an offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferResponseRequest {
    /// The responding monitor; must own the interest.
    pub monitor_id: Uuid,
    /// Confirm or decline.
    pub response: OfferResponse,
}

/// Body of `PUT /seasons/:id/team`: a bulk assignment edit.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamUpdateRequest {
    /// Per-assignment edits to apply.
    pub edits: Vec<AssignmentEdit>,
}

/// Body of `POST /seasons/notify`: seasons to announce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastRequest {
    /// The seasons the manager selected.
    pub season_ids: Vec<Uuid>,
}
