//! Season-opened notification broadcast.
//!
//! Managers select seasons to announce; every reachable monitor gets one
//! message per season. Only seasons that have not been announced yet are
//! eligible, and each announced season has its notified gate closed so the
//! same broadcast cannot repeat without a manager explicitly re-opening it.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::StaffingResult;
use crate::notify::{NotificationSender, season_opened_message};
use crate::store::StaffingStore;

/// Delivery counts for one announced season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonBroadcast {
    /// The season that was announced.
    pub season_id: Uuid,
    /// How many monitors were sent the announcement.
    pub recipients: usize,
    /// How many sends the transport refused.
    pub failures: usize,
}

/// The outcome of a broadcast request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastSummary {
    /// Per-season delivery counts, in request order.
    pub announced: Vec<SeasonBroadcast>,
    /// Requested seasons that were not announced: unknown ids and seasons
    /// whose notification already went out.
    pub skipped: Vec<Uuid>,
}

/// Announces the given seasons to every reachable monitor.
///
/// Unknown and already-notified seasons are skipped, mirroring the manager
/// UI where a stale selection is not an error. A send failure is counted
/// and logged; the season is still marked notified — notification delivery
/// is best-effort and never rolls back state.
pub fn broadcast_open_seasons(
    store: &mut StaffingStore,
    season_ids: &[Uuid],
    notifier: &dyn NotificationSender,
) -> StaffingResult<BroadcastSummary> {
    let mut announced = Vec::new();
    let mut skipped = Vec::new();

    for &season_id in season_ids {
        let eligible = match store.season(season_id) {
            Ok(season) => !season.notified,
            Err(_) => false,
        };
        if !eligible {
            warn!(%season_id, "broadcast skipped: unknown or already notified");
            skipped.push(season_id);
            continue;
        }

        let season = store.season(season_id)?.clone();
        let (subject, body) = season_opened_message(&season);

        let mut recipients = 0;
        let mut failures = 0;
        for monitor in store.reachable_monitors() {
            // reachable_monitors only returns accounts with an address
            let Some(email) = monitor.email.as_deref() else {
                continue;
            };
            recipients += 1;
            if !notifier.notify(email, &subject, &body) {
                failures += 1;
            }
        }
        if failures > 0 {
            warn!(%season_id, failures, "some season announcements were not delivered");
        }

        store.season_mut(season_id)?.mark_notified();
        info!(%season_id, recipients, "season announced");
        announced.push(SeasonBroadcast {
            season_id,
            recipients,
            failures,
        });
    }

    Ok(BroadcastSummary { announced, skipped })
}
