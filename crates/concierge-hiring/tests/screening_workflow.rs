//! Integration specifications for the candidate screening workflow.
//!
//! Scenarios exercise the public service facade and the HTTP router end to
//! end, covering scoring, explainability, the audit trail, the CSV export
//! contract, and session analytics without reaching into private modules.

mod common {
    use concierge_hiring::screening::{
        CriteriaSet, ResumeUpload, ScreeningService, ScreeningState, ScreeningSubmission,
    };

    pub(super) const FIT_RESUME: &str = "Led guest experience programs across luxury retail. \
        Bilingual Arabic and English. Front office and POS operations, stakeholder management \
        with cross-functional vendors, weekly Excel dashboards and KPI reporting.";

    pub(super) const NON_FIT_RESUME: &str = "Rust developer focused on embedded systems, \
        device drivers, and real-time control loops.";

    pub(super) fn standard_service() -> ScreeningService {
        ScreeningService::new(CriteriaSet::standard())
    }

    pub(super) fn standard_state() -> ScreeningState {
        ScreeningState::new(standard_service())
    }

    pub(super) fn submission(name: &str, resume: &str, is_emirati: bool) -> ScreeningSubmission {
        ScreeningSubmission {
            candidate_name: name.to_string(),
            role_title: "Guest Experience Supervisor".to_string(),
            is_emirati,
            resume: ResumeUpload::Text(resume.to_string()),
        }
    }
}

mod service_flow {
    use super::common::*;
    use concierge_hiring::screening::{ScreeningError, SessionLog, EXPORT_HEADER};

    #[test]
    fn full_fit_candidate_scores_the_whole_rubric() {
        let service = standard_service();
        let mut session = SessionLog::new();

        let report = service
            .score_candidate(&mut session, submission("Aisha Khan", FIT_RESUME, true))
            .expect("scoring succeeds");

        assert_eq!(report.fit_score, 100.0);
        assert_eq!(report.details.len(), 5);
        assert!(report.details.iter().all(|detail| detail.is_match()));
        assert_eq!(
            report.top_strengths,
            vec!["Customer Empathy", "Arabic / Multilingual"]
        );
        assert_eq!(report.explanation.lines().count(), 5);
    }

    #[test]
    fn non_fit_candidate_scores_zero_but_is_still_audited() {
        let service = standard_service();
        let mut session = SessionLog::new();

        let report = service
            .score_candidate(&mut session, submission("Armaan Satish", NON_FIT_RESUME, false))
            .expect("scoring succeeds");

        assert_eq!(report.fit_score, 0.0);
        assert_eq!(session.len(), 1);
        assert_eq!(session.records()[0].matched_criteria, "None");
    }

    #[test]
    fn audit_trail_grows_by_one_row_per_pass_and_failures_leave_no_trace() {
        let service = standard_service();
        let mut session = SessionLog::new();

        service
            .score_candidate(&mut session, submission("Aisha Khan", FIT_RESUME, true))
            .expect("first pass succeeds");
        let rejected = service.score_candidate(&mut session, submission("", FIT_RESUME, false));
        assert_eq!(rejected, Err(ScreeningError::MissingCandidateName));
        service
            .score_candidate(&mut session, submission("Armaan Satish", NON_FIT_RESUME, false))
            .expect("second pass succeeds");

        assert_eq!(session.len(), 2);
        assert_ne!(
            session.records()[0].candidate_id,
            session.records()[1].candidate_id
        );

        let csv = session.export_csv().expect("export succeeds");
        let header = csv.lines().next().expect("header present");
        assert_eq!(header, EXPORT_HEADER.join(","));
        assert_eq!(csv.lines().count(), 3);
    }
}

mod http_flow {
    use super::common::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use concierge_hiring::screening::screening_router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    fn score_request(payload: &Value) -> Request<Body> {
        Request::post("/api/v1/screening/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn score_endpoint_returns_report_and_feeds_the_audit_log() {
        let state = standard_state();
        let app = screening_router(state.clone());

        let payload = json!({
            "candidate_name": "Aisha Khan",
            "role_title": "Guest Experience Supervisor",
            "is_emirati": true,
            "resume_text": FIT_RESUME,
        });
        let response = app
            .clone()
            .oneshot(score_request(&payload))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["fit_score"], json!(100.0));
        assert_eq!(body["candidate_id"].as_str().expect("id string").len(), 8);
        assert!(body["script"]
            .as_str()
            .expect("script string")
            .contains("Aisha Khan"));

        let audit = app
            .clone()
            .oneshot(
                Request::get("/api/v1/screening/audit")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let rows = body_json(audit).await;
        assert_eq!(rows.as_array().expect("array").len(), 1);
        assert_eq!(rows[0]["candidate_name"], json!("Aisha Khan"));
    }

    #[tokio::test]
    async fn incomplete_form_is_rejected_with_422_and_no_audit_row() {
        let state = standard_state();
        let app = screening_router(state.clone());

        let payload = json!({
            "candidate_name": "",
            "role_title": "Guest Experience Supervisor",
            "resume_text": FIT_RESUME,
        });
        let response = app
            .clone()
            .oneshot(score_request(&payload))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let session = state.session.lock().expect("session mutex poisoned");
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn criteria_override_changes_the_scoring_rubric() {
        let state = standard_state();
        let app = screening_router(state);

        let payload = json!({
            "candidate_name": "Armaan Satish",
            "role_title": "Firmware Engineer",
            "resume_text": NON_FIT_RESUME,
            "criteria": [
                { "name": "Embedded", "weight": 60.0, "keywords": ["embedded systems"] },
                { "name": "Hospitality", "weight": 40.0, "keywords": ["hospitality"] }
            ],
        });
        let response = app
            .oneshot(score_request(&payload))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["fit_score"], json!(60.0));
        assert_eq!(body["details"].as_array().expect("details").len(), 2);
    }

    #[tokio::test]
    async fn negative_weight_override_is_rejected_and_never_audited() {
        let state = standard_state();
        let app = screening_router(state.clone());

        // A negative weight on a matching criterion would push the fit score
        // below zero and poison the audit log and analytics buckets.
        let payload = json!({
            "candidate_name": "Armaan Satish",
            "role_title": "Firmware Engineer",
            "resume_text": NON_FIT_RESUME,
            "criteria": [
                { "name": "Embedded", "weight": -50.0, "keywords": ["embedded systems"] }
            ],
        });
        let response = app
            .oneshot(score_request(&payload))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .expect("error string")
            .contains("invalid weight"));

        let session = state.session.lock().expect("session mutex poisoned");
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn export_endpoint_serves_the_csv_contract() {
        let state = standard_state();
        let app = screening_router(state);

        let payload = json!({
            "candidate_name": "Aisha Khan",
            "role_title": "Guest Experience Supervisor",
            "resume_text": FIT_RESUME,
        });
        app.clone()
            .oneshot(score_request(&payload))
            .await
            .expect("router responds");

        let response = app
            .oneshot(
                Request::get("/api/v1/screening/audit/export")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .expect("content type"),
            "text/csv"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let csv = String::from_utf8(bytes.to_vec()).expect("csv is utf-8");
        assert!(csv.starts_with(
            "timestamp,candidate_id,candidate_name,is_emirati,role_title,fit_score,matched_criteria,criteria_weights_json"
        ));
        assert_eq!(csv.lines().count(), 2);
    }

    #[tokio::test]
    async fn analytics_endpoint_rolls_up_the_session() {
        let state = standard_state();
        let app = screening_router(state);

        for (name, resume, is_emirati) in [
            ("Aisha Khan", FIT_RESUME, true),
            ("Armaan Satish", NON_FIT_RESUME, false),
        ] {
            let payload = json!({
                "candidate_name": name,
                "role_title": "Guest Experience Supervisor",
                "is_emirati": is_emirati,
                "resume_text": resume,
            });
            app.clone()
                .oneshot(score_request(&payload))
                .await
                .expect("router responds");
        }

        let response = app
            .oneshot(
                Request::get("/api/v1/screening/analytics")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let body = body_json(response).await;

        assert_eq!(body["total_candidates"], json!(2));
        assert_eq!(body["emirati_candidates"], json!(1));
        assert_eq!(body["emirati_share_pct"], json!(50.0));
        assert_eq!(body["average_score_emirati"], json!(100.0));
        assert_eq!(body["average_score_non_emirati"], json!(0.0));
    }
}
