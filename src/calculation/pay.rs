//! Per-assignment pay calculation.
//!
//! This module provides the pure pay function: given a monitor, a season,
//! the team assignment, and the rate table to apply, it produces an
//! itemized [`PayBreakdown`]. It never consults global state; the caller
//! decides which rate table is current.

use rust_decimal::Decimal;

use crate::models::{
    AllowanceClass, Monitor, PayBreakdown, RateTable, SeasonCategory, TeamAssignment,
};

/// Calculates the itemized pay for one assignment.
///
/// The base component is the daily rate times the season's paid days. For
/// day-use seasons the table's day-use rate applies regardless of the
/// monitor's category, and paid days is always 1. Benefit components are
/// only included when the assignment both opts in and carries the
/// corresponding value: the allowance needs a resolved class, boarding and
/// deboarding need an amount. A missing rate table zeroes the daily rate
/// rather than failing, so a report can always be produced.
///
/// # Arguments
///
/// * `monitor` - The monitor being paid
/// * `season_category` - Category of the season worked
/// * `paid_days` - The season's paid-day count
/// * `assignment` - The monitor's assignment, carrying benefit flags
/// * `allowance_class` - The resolved allowance class, if the assignment references one
/// * `rate_table` - The rate table to apply, if any is configured
///
/// # Examples
///
/// ```
/// use camp_staffing::calculation::compute_pay;
/// use camp_staffing::models::{
///     AllowanceClass, Monitor, MonitorCategory, RateTable, SeasonCategory, TeamAssignment,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let monitor = Monitor::new("ana", MonitorCategory::Monitor);
/// let mut table = RateTable::zeroed(Utc::now());
/// table.monitor = Decimal::from_str("210.00").unwrap();
/// let allowance = AllowanceClass::new("allowance_1", Decimal::from_str("90.00").unwrap());
/// let mut assignment = TeamAssignment::new(Uuid::new_v4(), monitor.id);
/// assignment.receives_allowance = true;
/// assignment.allowance_class_id = Some(allowance.id);
///
/// let breakdown = compute_pay(
///     &monitor,
///     SeasonCategory::Vacation,
///     Decimal::from_str("3.5").unwrap(),
///     &assignment,
///     Some(&allowance),
///     Some(&table),
/// );
/// assert_eq!(breakdown.total, Decimal::from_str("825.00").unwrap());
/// ```
pub fn compute_pay(
    monitor: &Monitor,
    season_category: SeasonCategory,
    paid_days: Decimal,
    assignment: &TeamAssignment,
    allowance_class: Option<&AllowanceClass>,
    rate_table: Option<&RateTable>,
) -> PayBreakdown {
    let daily_rate = match rate_table {
        Some(table) => table.daily_rate_for(monitor.category, season_category),
        None => Decimal::ZERO,
    };
    let base = daily_rate * paid_days;

    let allowance = if assignment.receives_allowance {
        allowance_class.map(|class| class.amount).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let boarding = if assignment.receives_boarding {
        assignment.boarding_amount.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let deboarding = if assignment.receives_deboarding {
        assignment.deboarding_amount.unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    PayBreakdown {
        monitor_id: monitor.id,
        season_id: assignment.season_id,
        daily_rate,
        days: paid_days,
        base,
        allowance,
        boarding,
        deboarding,
        total: base + allowance + boarding + deboarding,
    }
}
