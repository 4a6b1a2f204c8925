use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use concierge_hiring::scheduling::{upcoming_timeslots, CallConfirmation};
use concierge_hiring::screening::{screening_router, ScreeningState};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub(crate) fn with_screening_routes(state: ScreeningState) -> axum::Router {
    screening_router(state)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/concierge/slots",
            axum::routing::get(slots_endpoint),
        )
        .route(
            "/api/v1/concierge/schedule",
            axum::routing::post(schedule_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn slots_endpoint(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    let slots = upcoming_timeslots(state.screening_config.slot_count);
    Json(json!({ "slots": slots }))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleRequest {
    pub(crate) candidate_name: String,
    #[serde(default)]
    pub(crate) role_title: Option<String>,
    /// Chosen slot string; the first upcoming slot is booked when omitted.
    #[serde(default)]
    pub(crate) slot: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScheduleResponse {
    pub(crate) candidate_name: String,
    pub(crate) role_title: String,
    pub(crate) slot: String,
    pub(crate) confirmation: String,
}

pub(crate) async fn schedule_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> impl IntoResponse {
    let candidate_name = request.candidate_name.trim().to_string();
    if candidate_name.is_empty() {
        let payload = json!({ "error": "candidate name is required" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let role_title = request
        .role_title
        .filter(|role| !role.trim().is_empty())
        .unwrap_or_else(|| state.screening_config.default_role_title.clone());

    let slot = match request.slot.filter(|slot| !slot.trim().is_empty()) {
        Some(slot) => slot,
        None => match upcoming_timeslots(1).into_iter().next() {
            Some(slot) => slot,
            None => {
                let payload = json!({ "error": "no call slots available" });
                return (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response();
            }
        },
    };

    let confirmation = CallConfirmation {
        candidate_name: candidate_name.clone(),
        role_title: role_title.clone(),
        slot: slot.clone(),
    };

    let response = ScheduleResponse {
        candidate_name,
        role_title,
        slot,
        confirmation: confirmation.render_text(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
