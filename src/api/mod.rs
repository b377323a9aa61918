//! HTTP API for the camp staffing system.
//!
//! This module provides the REST endpoints for managing seasons, the
//! interest workflow, team assignments, and pay reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BroadcastRequest, DecisionRequest, InterestRequest, OfferResponseRequest, TeamUpdateRequest,
};
pub use response::ApiError;
pub use state::AppState;
