//! Interest workflow transitions.
//!
//! The interest record moves through a two-party handshake: a monitor
//! proposes, a manager decides, and an approved monitor confirms or
//! declines. Approval is an offer, not a binding assignment, until the
//! monitor accepts — which is why the manager decision and the monitor
//! response are separate transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{StaffingError, StaffingResult};
use crate::models::{Interest, InterestStatus, StaffAction, TeamAssignment};
use crate::notify::{NotificationSender, approval_message};
use crate::store::StaffingStore;

/// A manager's decision on an interest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Approve the interest and open an offer to the monitor.
    Approve,
    /// Reject the interest terminally.
    Reject,
}

/// A monitor's response to an approved interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferResponse {
    /// Accept the offer.
    Confirm,
    /// Decline the offer.
    Decline,
}

/// The result of a manager decision.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionOutcome {
    /// The interest record after the transition.
    pub interest: Interest,
    /// The assignment upserted on approval; `None` on rejection.
    pub assignment: Option<TeamAssignment>,
    /// Whether the approval notification was accepted by the sender.
    pub notified: bool,
}

/// Records a monitor's interest in a season.
///
/// The monitor must hold the monitor role and carry manager approval. The
/// operation is idempotent: a second submission (or the loser of a
/// creation race) receives the existing record instead of an error.
///
/// # Errors
///
/// * `NotFound` — unknown monitor or season.
/// * `NotPermitted` — the account does not hold the monitor role.
/// * `Conflict` — the monitor has not been approved by a manager.
pub fn propose_interest(
    store: &mut StaffingStore,
    monitor_id: Uuid,
    season_id: Uuid,
    now: DateTime<Utc>,
) -> StaffingResult<Interest> {
    let monitor = store.monitor(monitor_id)?;
    if !monitor.role.permits(StaffAction::ProposeInterest) {
        return Err(StaffingError::NotPermitted {
            account: monitor_id,
            action: "express interest in a season".to_string(),
        });
    }
    if !monitor.approved {
        return Err(StaffingError::Conflict {
            message: format!("monitor {} has not been approved for participation", monitor_id),
        });
    }
    store.season(season_id)?;

    let (interest, created) = store.get_or_create_interest(monitor_id, season_id, now);
    if created {
        info!(%monitor_id, %season_id, interest_id = %interest.id, "interest recorded");
    } else {
        info!(%monitor_id, %season_id, interest_id = %interest.id, "interest already on file");
    }
    Ok(interest)
}

/// Applies a manager decision to an interest record.
///
/// Only records in the `Interested` state can be decided. Approval upserts
/// the (season, monitor) assignment and sends a best-effort approval
/// notification; a send failure is logged and never rolls the transition
/// back. Rejection has no side effects.
///
/// # Errors
///
/// * `NotFound` — unknown interest record.
/// * `InvalidTransition` — the record is not in the `Interested` state.
pub fn manager_decide(
    store: &mut StaffingStore,
    interest_id: Uuid,
    decision: Decision,
    notifier: &dyn NotificationSender,
) -> StaffingResult<DecisionOutcome> {
    let current = store.interest(interest_id)?.clone();
    if current.status != InterestStatus::Interested {
        return Err(StaffingError::InvalidTransition {
            status: current.status,
            attempted: match decision {
                Decision::Approve => "approve".to_string(),
                Decision::Reject => "reject".to_string(),
            },
        });
    }

    match decision {
        Decision::Reject => {
            let interest = store.set_interest_status(interest_id, InterestStatus::Rejected)?;
            info!(%interest_id, "interest rejected");
            Ok(DecisionOutcome {
                interest,
                assignment: None,
                notified: false,
            })
        }
        Decision::Approve => {
            let interest = store.set_interest_status(interest_id, InterestStatus::Approved)?;
            let (assignment, created) =
                store.get_or_create_assignment(current.season_id, current.monitor_id);
            info!(
                %interest_id,
                assignment_id = %assignment.id,
                assignment_created = created,
                "interest approved"
            );

            let notified = send_approval(store, &current, notifier)?;
            Ok(DecisionOutcome {
                interest,
                assignment: Some(assignment),
                notified,
            })
        }
    }
}

/// Fire-and-forget approval notification. Failures are logged, not raised.
fn send_approval(
    store: &StaffingStore,
    interest: &Interest,
    notifier: &dyn NotificationSender,
) -> StaffingResult<bool> {
    let monitor = store.monitor(interest.monitor_id)?;
    let season = store.season(interest.season_id)?;
    let Some(email) = monitor.email.as_deref() else {
        warn!(monitor_id = %monitor.id, "monitor has no notification address, skipping approval notice");
        return Ok(false);
    };
    let (subject, body) = approval_message(season);
    let accepted = notifier.notify(email, &subject, &body);
    if !accepted {
        warn!(monitor_id = %monitor.id, "approval notification failed, transition kept");
    }
    Ok(accepted)
}

/// Applies the owning monitor's response to an approved interest.
///
/// Only the owning monitor may respond, and only while the record is in
/// the `Approved` state.
///
/// # Errors
///
/// * `NotFound` — unknown interest record or caller account.
/// * `NotInterestOwner` — the caller does not own the record.
/// * `InvalidTransition` — the record is not in the `Approved` state.
pub fn monitor_respond(
    store: &mut StaffingStore,
    interest_id: Uuid,
    caller: Uuid,
    response: OfferResponse,
) -> StaffingResult<Interest> {
    let current = store.interest(interest_id)?.clone();
    let monitor = store.monitor(caller)?;
    if !monitor.role.permits(StaffAction::RespondToOffer) {
        return Err(StaffingError::NotPermitted {
            account: caller,
            action: "respond to a season offer".to_string(),
        });
    }
    if current.monitor_id != caller {
        return Err(StaffingError::NotInterestOwner {
            interest: interest_id,
            monitor: caller,
        });
    }
    if current.status != InterestStatus::Approved {
        return Err(StaffingError::InvalidTransition {
            status: current.status,
            attempted: match response {
                OfferResponse::Confirm => "confirm".to_string(),
                OfferResponse::Decline => "decline".to_string(),
            },
        });
    }

    let status = match response {
        OfferResponse::Confirm => InterestStatus::Confirmed,
        OfferResponse::Decline => InterestStatus::Recused,
    };
    let interest = store.set_interest_status(interest_id, status)?;
    info!(%interest_id, status = %interest.status, "monitor responded to offer");
    Ok(interest)
}
