//! Pay report assembly.
//!
//! Resolves the entities a pay calculation needs from the store, picks the
//! current rate table, and hands everything to [`compute_pay`]. The
//! calculation itself stays pure; this is the only place that decides which
//! table applies.

use uuid::Uuid;

use crate::calculation::compute_pay;
use crate::error::{StaffingError, StaffingResult};
use crate::models::PayBreakdown;
use crate::store::StaffingStore;

/// Builds the itemized pay report for one monitor on one season.
///
/// # Errors
///
/// Returns [`StaffingError::NotFound`] when the monitor or season does not
/// exist, or when the monitor has no assignment on that season. A missing
/// rate table is not an error; the breakdown simply carries a zero rate.
pub fn pay_report(
    store: &StaffingStore,
    season_id: Uuid,
    monitor_id: Uuid,
) -> StaffingResult<PayBreakdown> {
    let monitor = store.monitor(monitor_id)?;
    let season = store.season(season_id)?;
    let assignment = store
        .assignment_for_pair(season_id, monitor_id)
        .ok_or(StaffingError::NotFound {
            entity: "assignment",
            id: monitor_id,
        })?;

    let allowance_class = assignment
        .allowance_class_id
        .and_then(|id| store.allowance_class(id).ok());

    Ok(compute_pay(
        monitor,
        season.category,
        season.paid_days,
        assignment,
        allowance_class,
        store.current_rate_table(),
    ))
}
