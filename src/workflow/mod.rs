//! Staffing workflows: interest lifecycle, team editing, and season
//! announcements.
//!
//! Each workflow is a free function over [`StaffingStore`](crate::store::StaffingStore)
//! so the rules stay testable without the HTTP layer.

mod broadcast;
mod interest;
mod team_edit;

pub use broadcast::{BroadcastSummary, SeasonBroadcast, broadcast_open_seasons};
pub use interest::{Decision, DecisionOutcome, OfferResponse, manager_decide, monitor_respond, propose_interest};
pub use team_edit::{AssignmentEdit, SkippedEdit, TeamUpdateSummary, parse_money, update_team};
