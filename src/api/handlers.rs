//! HTTP request handlers for the staffing API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::pay_report;
use crate::models::{Season, SeasonDraft};
use crate::workflow::{broadcast_open_seasons, manager_decide, monitor_respond, propose_interest, update_team};

use super::request::{
    BroadcastRequest, DecisionRequest, InterestRequest, OfferResponseRequest, TeamUpdateRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/seasons", post(create_season_handler))
        .route("/seasons/notify", post(broadcast_handler))
        .route("/seasons/:id", put(edit_season_handler))
        .route("/seasons/:id/renotify", post(renotify_handler))
        .route(
            "/seasons/:id/team",
            get(list_team_handler).put(team_update_handler),
        )
        .route(
            "/seasons/:season_id/monitors/:monitor_id/pay",
            get(pay_report_handler),
        )
        .route("/interests", post(propose_interest_handler))
        .route("/interests/:id/decision", post(decision_handler))
        .route("/interests/:id/response", post(offer_response_handler))
        .with_state(state)
}

/// Turns a body rejection into an API error, logging it against the
/// request's correlation id.
fn json_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

/// Handler for POST /seasons.
async fn create_season_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeasonDraft>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return json_error(rejection, correlation_id).into_response(),
    };

    match Season::create(draft) {
        Ok(season) => {
            info!(
                correlation_id = %correlation_id,
                season_id = %season.id,
                category = ?season.category,
                "Season created"
            );
            let body = Json(season.clone());
            state.store().write().await.insert_season(season);
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Season creation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /seasons/:id.
async fn edit_season_handler(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
    payload: Result<Json<SeasonDraft>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return json_error(rejection, correlation_id).into_response(),
    };

    let mut store = state.store().write().await;
    let result = store
        .season_mut(season_id)
        .and_then(|season| season.edit(draft).map(|()| season.clone()));

    match result {
        Ok(season) => {
            info!(correlation_id = %correlation_id, season_id = %season_id, "Season updated");
            (StatusCode::OK, Json(season)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, season_id = %season_id, error = %err, "Season edit failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /seasons/:id/renotify.
async fn renotify_handler(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let mut store = state.store().write().await;

    match store.season_mut(season_id) {
        Ok(season) => {
            season.allow_renotify();
            info!(correlation_id = %correlation_id, season_id = %season_id, "Season reopened for notification");
            (StatusCode::OK, Json(season.clone())).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, season_id = %season_id, error = %err, "Renotify failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /seasons/notify.
async fn broadcast_handler(
    State(state): State<AppState>,
    payload: Result<Json<BroadcastRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_error(rejection, correlation_id).into_response(),
    };

    let mut store = state.store().write().await;
    match broadcast_open_seasons(&mut store, &request.season_ids, state.notifier()) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                announced = summary.announced.len(),
                skipped = summary.skipped.len(),
                "Season broadcast completed"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Season broadcast failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /interests.
async fn propose_interest_handler(
    State(state): State<AppState>,
    payload: Result<Json<InterestRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_error(rejection, correlation_id).into_response(),
    };

    let mut store = state.store().write().await;
    match propose_interest(&mut store, request.monitor_id, request.season_id, Utc::now()) {
        Ok(interest) => {
            info!(
                correlation_id = %correlation_id,
                interest_id = %interest.id,
                monitor_id = %request.monitor_id,
                season_id = %request.season_id,
                "Interest recorded"
            );
            (StatusCode::CREATED, Json(interest)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Interest proposal failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /interests/:id/decision.
async fn decision_handler(
    State(state): State<AppState>,
    Path(interest_id): Path<Uuid>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_error(rejection, correlation_id).into_response(),
    };

    let mut store = state.store().write().await;
    match manager_decide(&mut store, interest_id, request.decision, state.notifier()) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                interest_id = %interest_id,
                status = %outcome.interest.status,
                notified = outcome.notified,
                "Decision recorded"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, interest_id = %interest_id, error = %err, "Decision failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /interests/:id/response.
async fn offer_response_handler(
    State(state): State<AppState>,
    Path(interest_id): Path<Uuid>,
    payload: Result<Json<OfferResponseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_error(rejection, correlation_id).into_response(),
    };

    let mut store = state.store().write().await;
    match monitor_respond(&mut store, interest_id, request.monitor_id, request.response) {
        Ok(interest) => {
            info!(
                correlation_id = %correlation_id,
                interest_id = %interest_id,
                status = %interest.status,
                "Offer response recorded"
            );
            (StatusCode::OK, Json(interest)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, interest_id = %interest_id, error = %err, "Offer response failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /seasons/:id/team.
async fn list_team_handler(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
) -> impl IntoResponse {
    let store = state.store().read().await;

    match store.season(season_id) {
        Ok(_) => {
            let assignments: Vec<_> = store
                .assignments_for_season(season_id)
                .into_iter()
                .cloned()
                .collect();
            (StatusCode::OK, Json(assignments)).into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for PUT /seasons/:id/team.
async fn team_update_handler(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
    payload: Result<Json<TeamUpdateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_error(rejection, correlation_id).into_response(),
    };

    let mut store = state.store().write().await;
    match update_team(&mut store, season_id, request.edits) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                season_id = %season_id,
                updated = summary.updated,
                skipped = summary.skipped.len(),
                "Team update applied"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, season_id = %season_id, error = %err, "Team update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /seasons/:season_id/monitors/:monitor_id/pay.
async fn pay_report_handler(
    State(state): State<AppState>,
    Path((season_id, monitor_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let store = state.store().read().await;

    match pay_report(&store, season_id, monitor_id) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                season_id = %season_id,
                monitor_id = %monitor_id,
                total = %breakdown.total,
                "Pay report generated"
            );
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, season_id = %season_id, monitor_id = %monitor_id, error = %err, "Pay report failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
