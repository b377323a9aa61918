//! Season model and day-count rules.
//!
//! A season is a bookable camp period. Its paid-day count is the one field
//! with real business rules: it must be a non-negative multiple of half a
//! day, and day-use seasons are always billed as exactly one day.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StaffingError, StaffingResult};

/// Represents the category of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonCategory {
    /// School booking.
    School,
    /// Single-day booking, always billed as 1.0 paid days.
    DayUse,
    /// Family camp.
    Family,
    /// Vacation camp.
    Vacation,
    /// Special event.
    SpecialEvent,
}

/// The editable fields of a season, as submitted by a manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDraft {
    /// The category of the season.
    pub category: SeasonCategory,
    /// First day of the booking.
    pub start_date: NaiveDate,
    /// Last day of the booking.
    pub end_date: NaiveDate,
    /// Client the booking is for, if any.
    pub client: Option<String>,
    /// Time of day the team is expected on site.
    pub team_arrival: Option<NaiveTime>,
    /// Time of day the team leaves.
    pub team_departure: Option<NaiveTime>,
    /// Number of paid days, in 0.5 increments.
    pub paid_days: Decimal,
}

/// Represents a bookable camp period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// Unique identifier for the season.
    pub id: Uuid,
    /// The category of the season.
    pub category: SeasonCategory,
    /// First day of the booking.
    pub start_date: NaiveDate,
    /// Last day of the booking.
    pub end_date: NaiveDate,
    /// Client the booking is for, if any.
    pub client: Option<String>,
    /// Time of day the team is expected on site.
    pub team_arrival: Option<NaiveTime>,
    /// Time of day the team leaves.
    pub team_departure: Option<NaiveTime>,
    /// Number of paid days used for pay calculation.
    pub paid_days: Decimal,
    /// Whether the season-opened notification has gone out.
    pub notified: bool,
}

/// Half a day, the granularity of the paid-day count.
const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Validates and normalizes a paid-day count for the given category.
///
/// Day-use seasons are billed as exactly one day regardless of input; this
/// is a normalization, not a validation failure. All other categories
/// require a non-negative multiple of 0.5.
pub fn normalize_paid_days(category: SeasonCategory, days: Decimal) -> StaffingResult<Decimal> {
    if category == SeasonCategory::DayUse {
        return Ok(Decimal::ONE);
    }
    if days.is_sign_negative() {
        return Err(StaffingError::Validation {
            field: "paid_days".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if !(days % HALF_DAY).is_zero() {
        return Err(StaffingError::Validation {
            field: "paid_days".to_string(),
            message: format!("{} is not a multiple of 0.5", days),
        });
    }
    Ok(days)
}

impl Season {
    /// Creates a season from a manager-submitted draft.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the paid-day count is negative or not a
    /// multiple of 0.5 (except for day-use, which is normalized to 1.0).
    pub fn create(draft: SeasonDraft) -> StaffingResult<Self> {
        let paid_days = normalize_paid_days(draft.category, draft.paid_days)?;
        Ok(Self {
            id: Uuid::new_v4(),
            category: draft.category,
            start_date: draft.start_date,
            end_date: draft.end_date,
            client: draft.client,
            team_arrival: draft.team_arrival,
            team_departure: draft.team_departure,
            paid_days,
            notified: false,
        })
    }

    /// Applies an edit, re-running the same normalization as `create`.
    ///
    /// Changing the category to day-use re-applies the 1.0 override on
    /// save. The notified flag is never touched by edits.
    pub fn edit(&mut self, draft: SeasonDraft) -> StaffingResult<()> {
        let paid_days = normalize_paid_days(draft.category, draft.paid_days)?;
        self.category = draft.category;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.client = draft.client;
        self.team_arrival = draft.team_arrival;
        self.team_departure = draft.team_departure;
        self.paid_days = paid_days;
        Ok(())
    }

    /// Records that the season-opened notification has gone out. Idempotent.
    pub fn mark_notified(&mut self) {
        self.notified = true;
    }

    /// Clears the notification gate so a manager can resend.
    pub fn allow_renotify(&mut self) {
        self.notified = false;
    }
}
