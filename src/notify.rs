//! Notification collaborator seam.
//!
//! The workflow only ever talks to a [`NotificationSender`]; the real
//! delivery transport lives outside this crate. Send failures are reported
//! through the boolean return and logged by callers, never raised — a
//! failed notification must not roll back a workflow transition.

use crate::models::Season;

/// Delivers a single notification to one recipient.
///
/// Implementations must not panic; delivery problems are reported by
/// returning `false`.
pub trait NotificationSender {
    /// Sends a message and reports whether delivery was accepted.
    fn notify(&self, recipient: &str, subject: &str, body: &str) -> bool;
}

/// A sender that only logs, used when no transport is wired up.
#[derive(Debug, Default)]
pub struct LogOnlySender;

impl NotificationSender for LogOnlySender {
    fn notify(&self, recipient: &str, subject: &str, body: &str) -> bool {
        tracing::info!(recipient, subject, body_len = body.len(), "notification (log only)");
        true
    }
}

/// Builds the subject and body for an approval notification.
pub fn approval_message(season: &Season) -> (String, String) {
    let subject = format!(
        "You have been approved for the season starting {}",
        season.start_date
    );
    let body = format!(
        "Congratulations! You have been approved for the season from {} to {}.\n\n\
         Please log in to confirm or decline your participation.\n\n\
         The Camp Team",
        season.start_date, season.end_date
    );
    (subject, body)
}

/// Builds the subject and body for a season-opened broadcast.
pub fn season_opened_message(season: &Season) -> (String, String) {
    let subject = format!("New season available: {} to {}", season.start_date, season.end_date);
    let client = season.client.as_deref().unwrap_or("-");
    let body = format!(
        "Hello! A new season has been opened:\n\n\
         Dates: {} to {}\n\
         Client: {}\n\n\
         Log in to express your interest.\n\n\
         The Camp Team",
        season.start_date, season.end_date, client
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Season, SeasonCategory, SeasonDraft};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn sample_season(client: Option<&str>) -> Season {
        Season::create(SeasonDraft {
            category: SeasonCategory::Vacation,
            start_date: NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            client: client.map(str::to_string),
            team_arrival: None,
            team_departure: None,
            paid_days: Decimal::from(4),
        })
        .unwrap()
    }

    #[test]
    fn test_approval_message_names_dates_and_asks_for_response() {
        let (subject, body) = approval_message(&sample_season(None));
        assert!(subject.contains("2026-07-06"));
        assert!(body.contains("2026-07-10"));
        assert!(body.contains("confirm or decline"));
    }

    #[test]
    fn test_season_opened_message_includes_client_or_dash() {
        let (_, body) = season_opened_message(&sample_season(Some("Escola Aurora")));
        assert!(body.contains("Escola Aurora"));

        let (_, body) = season_opened_message(&sample_season(None));
        assert!(body.contains("Client: -"));
    }

    #[test]
    fn test_log_only_sender_reports_success() {
        let sender = LogOnlySender;
        assert!(sender.notify("someone@example.com", "subject", "body"));
    }
}
