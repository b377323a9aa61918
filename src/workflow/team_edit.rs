//! Bulk per-season editing of team assignment benefits.
//!
//! Managers edit a whole season's assignments in one submission. Each row
//! is validated and applied independently: a bad row is reported and
//! skipped, never aborting the rest of the batch. Monetary inputs arrive
//! as text from a form and accept a comma decimal separator; text that
//! does not parse means "no override" rather than an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::StaffingResult;
use crate::models::AssignmentStatus;
use crate::store::StaffingStore;

/// One row of a team edit submission.
///
/// `None` fields are left unchanged on the assignment. Monetary fields are
/// raw form text; see [`parse_money`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentEdit {
    /// The assignment this row targets.
    pub assignment_id: Uuid,
    /// New assignment status.
    #[serde(default)]
    pub status: Option<AssignmentStatus>,
    /// New value for the supplemental-allowance flag.
    #[serde(default)]
    pub receives_allowance: Option<bool>,
    /// Allowance class to pay from; must exist.
    #[serde(default)]
    pub allowance_class_id: Option<Uuid>,
    /// New value for the special-boarding flag.
    #[serde(default)]
    pub receives_boarding: Option<bool>,
    /// Boarding override amount as submitted text.
    #[serde(default)]
    pub boarding_amount: Option<String>,
    /// New value for the special-deboarding flag.
    #[serde(default)]
    pub receives_deboarding: Option<bool>,
    /// Deboarding override amount as submitted text.
    #[serde(default)]
    pub deboarding_amount: Option<String>,
}

/// A row that could not be applied, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEdit {
    /// The assignment id the row targeted.
    pub assignment_id: Uuid,
    /// Why the row was skipped.
    pub reason: String,
}

/// The outcome of a bulk team edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamUpdateSummary {
    /// How many rows were applied.
    pub updated: usize,
    /// Rows that were reported and skipped.
    pub skipped: Vec<SkippedEdit>,
}

/// Parses a monetary form input.
///
/// A comma decimal separator is normalized to a dot before parsing
/// (locale normalization). Empty, whitespace-only, or unparsable text
/// yields `None` — "no override", never an error.
pub fn parse_money(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

/// Applies a batch of assignment edits for one season.
///
/// Rows targeting an unknown assignment, an assignment from another
/// season, or an unknown allowance class are skipped and reported; the
/// remaining rows are still applied.
///
/// # Errors
///
/// Returns `NotFound` only when the season itself does not exist.
pub fn update_team(
    store: &mut StaffingStore,
    season_id: Uuid,
    edits: Vec<AssignmentEdit>,
) -> StaffingResult<TeamUpdateSummary> {
    store.season(season_id)?;

    let mut updated = 0;
    let mut skipped = Vec::new();

    for edit in edits {
        // Validate the whole row before mutating anything on it.
        let Ok(assignment) = store.assignment(edit.assignment_id) else {
            warn!(assignment_id = %edit.assignment_id, "team edit targets unknown assignment");
            skipped.push(SkippedEdit {
                assignment_id: edit.assignment_id,
                reason: "unknown assignment".to_string(),
            });
            continue;
        };
        if assignment.season_id != season_id {
            warn!(assignment_id = %edit.assignment_id, "team edit targets another season's assignment");
            skipped.push(SkippedEdit {
                assignment_id: edit.assignment_id,
                reason: "assignment belongs to another season".to_string(),
            });
            continue;
        }
        if let Some(class_id) = edit.allowance_class_id {
            if store.allowance_class(class_id).is_err() {
                skipped.push(SkippedEdit {
                    assignment_id: edit.assignment_id,
                    reason: format!("unknown allowance class {}", class_id),
                });
                continue;
            }
        }

        let assignment = store.assignment_mut(edit.assignment_id)?;
        if let Some(status) = edit.status {
            assignment.status = status;
        }
        if let Some(flag) = edit.receives_allowance {
            assignment.receives_allowance = flag;
        }
        if let Some(class_id) = edit.allowance_class_id {
            assignment.allowance_class_id = Some(class_id);
        }
        if let Some(flag) = edit.receives_boarding {
            assignment.receives_boarding = flag;
        }
        if let Some(text) = edit.boarding_amount.as_deref() {
            assignment.boarding_amount = parse_money(text);
        }
        if let Some(flag) = edit.receives_deboarding {
            assignment.receives_deboarding = flag;
        }
        if let Some(text) = edit.deboarding_amount.as_deref() {
            assignment.deboarding_amount = parse_money(text);
        }
        updated += 1;
    }

    info!(
        %season_id,
        updated,
        skipped = skipped.len(),
        "team edit applied"
    );
    Ok(TeamUpdateSummary { updated, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaffingError;
    use crate::models::{AllowanceClass, Season, SeasonCategory, SeasonDraft};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fixture() -> (StaffingStore, Uuid, Uuid) {
        let mut store = StaffingStore::new();
        let season = Season::create(SeasonDraft {
            category: SeasonCategory::School,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
            client: None,
            team_arrival: None,
            team_departure: None,
            paid_days: dec("4.5"),
        })
        .unwrap();
        let season_id = season.id;
        store.insert_season(season);
        let (assignment, _) = store.get_or_create_assignment(season_id, Uuid::new_v4());
        (store, season_id, assignment.id)
    }

    fn edit_for(assignment_id: Uuid) -> AssignmentEdit {
        AssignmentEdit {
            assignment_id,
            ..AssignmentEdit::default()
        }
    }

    #[test]
    fn test_parse_money_accepts_comma_separator() {
        assert_eq!(parse_money("145,50"), Some(dec("145.50")));
        assert_eq!(parse_money("  90.00 "), Some(dec("90.00")));
        assert_eq!(parse_money("265"), Some(dec("265")));
    }

    #[test]
    fn test_parse_money_treats_junk_as_no_override() {
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("   "), None);
        assert_eq!(parse_money("abc"), None);
        assert_eq!(parse_money("12,34,56"), None);
    }

    #[test]
    fn test_update_applies_flags_and_amounts() {
        let (mut store, season_id, assignment_id) = fixture();
        let class = AllowanceClass::new("allowance_1", dec("90.00"));
        let class_id = class.id;
        store.insert_allowance_class(class).unwrap();

        let summary = update_team(
            &mut store,
            season_id,
            vec![AssignmentEdit {
                assignment_id,
                status: Some(AssignmentStatus::Confirmed),
                receives_allowance: Some(true),
                allowance_class_id: Some(class_id),
                receives_boarding: Some(true),
                boarding_amount: Some("120,00".to_string()),
                receives_deboarding: None,
                deboarding_amount: None,
            }],
        )
        .unwrap();

        assert_eq!(summary.updated, 1);
        assert!(summary.skipped.is_empty());

        let assignment = store.assignment(assignment_id).unwrap();
        assert_eq!(assignment.status, AssignmentStatus::Confirmed);
        assert!(assignment.receives_allowance);
        assert_eq!(assignment.allowance_class_id, Some(class_id));
        assert_eq!(assignment.boarding_amount, Some(dec("120.00")));
        assert!(!assignment.receives_deboarding);
    }

    #[test]
    fn test_unparsable_amount_clears_override_but_applies_row() {
        let (mut store, season_id, assignment_id) = fixture();
        // Seed an existing override so the clearing is observable.
        store.assignment_mut(assignment_id).unwrap().boarding_amount = Some(dec("80.00"));

        let summary = update_team(
            &mut store,
            season_id,
            vec![AssignmentEdit {
                assignment_id,
                receives_boarding: Some(true),
                boarding_amount: Some("not a number".to_string()),
                ..edit_for(assignment_id)
            }],
        )
        .unwrap();

        assert_eq!(summary.updated, 1);
        let assignment = store.assignment(assignment_id).unwrap();
        assert!(assignment.receives_boarding);
        assert_eq!(assignment.boarding_amount, None);
    }

    #[test]
    fn test_bad_row_does_not_abort_batch() {
        let (mut store, season_id, assignment_id) = fixture();
        let missing = Uuid::new_v4();

        let summary = update_team(
            &mut store,
            season_id,
            vec![
                edit_for(missing),
                AssignmentEdit {
                    assignment_id,
                    status: Some(AssignmentStatus::Completed),
                    ..edit_for(assignment_id)
                },
            ],
        )
        .unwrap();

        assert_eq!(summary.updated, 1);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].assignment_id, missing);
        assert_eq!(
            store.assignment(assignment_id).unwrap().status,
            AssignmentStatus::Completed
        );
    }

    #[test]
    fn test_unknown_allowance_class_skips_row_untouched() {
        let (mut store, season_id, assignment_id) = fixture();

        let summary = update_team(
            &mut store,
            season_id,
            vec![AssignmentEdit {
                assignment_id,
                status: Some(AssignmentStatus::Confirmed),
                receives_allowance: Some(true),
                allowance_class_id: Some(Uuid::new_v4()),
                ..edit_for(assignment_id)
            }],
        )
        .unwrap();

        assert_eq!(summary.updated, 0);
        assert_eq!(summary.skipped.len(), 1);
        // Row atomicity: nothing on the assignment changed.
        let assignment = store.assignment(assignment_id).unwrap();
        assert_eq!(assignment.status, AssignmentStatus::Pending);
        assert!(!assignment.receives_allowance);
    }

    #[test]
    fn test_other_seasons_assignment_is_skipped() {
        let (mut store, season_id, _) = fixture();
        let (foreign, _) = store.get_or_create_assignment(Uuid::new_v4(), Uuid::new_v4());

        let summary = update_team(&mut store, season_id, vec![edit_for(foreign.id)]).unwrap();

        assert_eq!(summary.updated, 0);
        assert_eq!(summary.skipped[0].reason, "assignment belongs to another season");
    }

    #[test]
    fn test_unknown_season_is_not_found() {
        let (mut store, _, assignment_id) = fixture();
        let result = update_team(&mut store, Uuid::new_v4(), vec![edit_for(assignment_id)]);
        assert!(matches!(
            result,
            Err(StaffingError::NotFound { entity: "season", .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_comma_and_dot_parse_identically(cents in 0u64..100_000_000) {
            let units = cents / 100;
            let frac = cents % 100;
            let with_dot = format!("{}.{:02}", units, frac);
            let with_comma = format!("{},{:02}", units, frac);
            prop_assert_eq!(parse_money(&with_dot), parse_money(&with_comma));
            prop_assert!(parse_money(&with_dot).is_some());
        }
    }
}
