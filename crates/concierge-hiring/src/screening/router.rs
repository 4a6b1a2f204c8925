use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::analytics::session_analytics;
use super::audit::SessionLog;
use super::domain::{CriteriaSet, Criterion, ResumeUpload, ScreeningSubmission};
use super::service::ScreeningService;

/// Shared state for the screening endpoints. The session log is owned here,
/// by the serving context, and lives exactly as long as the process.
#[derive(Clone)]
pub struct ScreeningState {
    pub service: Arc<ScreeningService>,
    pub session: Arc<Mutex<SessionLog>>,
}

impl ScreeningState {
    pub fn new(service: ScreeningService) -> Self {
        Self {
            service: Arc::new(service),
            session: Arc::new(Mutex::new(SessionLog::new())),
        }
    }
}

/// Router builder exposing the scoring, audit, and analytics endpoints.
pub fn screening_router(state: ScreeningState) -> Router {
    Router::new()
        .route("/api/v1/screening/score", post(score_handler))
        .route("/api/v1/screening/audit", get(audit_handler))
        .route("/api/v1/screening/audit/export", get(export_handler))
        .route("/api/v1/screening/analytics", get(analytics_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate_name: String,
    pub role_title: String,
    #[serde(default)]
    pub is_emirati: bool,
    pub resume_text: String,
    /// Optional rubric override; the service default applies when omitted.
    #[serde(default)]
    pub criteria: Option<Vec<Criterion>>,
}

pub(crate) async fn score_handler(
    State(state): State<ScreeningState>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    let submission = ScreeningSubmission {
        candidate_name: request.candidate_name,
        role_title: request.role_title,
        is_emirati: request.is_emirati,
        resume: ResumeUpload::Text(request.resume_text),
    };

    let mut session = state.session.lock().expect("session mutex poisoned");
    let outcome = match request.criteria {
        Some(criteria) => state.service.score_with_criteria(
            &mut session,
            CriteriaSet::new(criteria),
            submission,
        ),
        None => state.service.score_candidate(&mut session, submission),
    };

    match outcome {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        // Every ScreeningError is a validation failure requiring corrected
        // input, including bad weights in a rubric override.
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn audit_handler(State(state): State<ScreeningState>) -> Response {
    let session = state.session.lock().expect("session mutex poisoned");
    (StatusCode::OK, Json(session.records().to_vec())).into_response()
}

pub(crate) async fn export_handler(State(state): State<ScreeningState>) -> Response {
    let session = state.session.lock().expect("session mutex poisoned");
    match session.export_csv() {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"hiring_audit_log.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn analytics_handler(State(state): State<ScreeningState>) -> Response {
    let session = state.session.lock().expect("session mutex poisoned");
    (StatusCode::OK, Json(session_analytics(&session))).into_response()
}
