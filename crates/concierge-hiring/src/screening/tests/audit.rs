use std::collections::HashSet;

use super::common::*;
use crate::screening::audit::{SessionLog, EXPORT_HEADER};
use crate::screening::service::ScreeningService;

#[test]
fn one_row_per_scoring_call_in_submission_order() {
    let service = ScreeningService::new(two_criteria_set());
    let mut session = SessionLog::new();

    let names = ["Aisha Khan", "Armaan Satish", "Layla Ahmed"];
    for name in names {
        service
            .score_candidate(&mut session, submission(name, HOSPITALITY_RESUME))
            .expect("scoring succeeds");
    }

    assert_eq!(session.len(), names.len());
    for (record, name) in session.records().iter().zip(names) {
        assert_eq!(record.candidate_name, name);
    }
}

#[test]
fn candidate_ids_are_short_and_distinct_within_a_session() {
    let service = ScreeningService::new(two_criteria_set());
    let mut session = SessionLog::new();

    for _ in 0..10 {
        service
            .score_candidate(&mut session, submission("Aisha Khan", HOSPITALITY_RESUME))
            .expect("scoring succeeds");
    }

    let ids: HashSet<&str> = session
        .records()
        .iter()
        .map(|record| record.candidate_id.0.as_str())
        .collect();
    assert_eq!(ids.len(), 10, "ids must be distinct even for one name");
    for id in ids {
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}

#[test]
fn records_capture_match_summary_and_weights() {
    let service = ScreeningService::new(two_criteria_set());
    let mut session = SessionLog::new();

    service
        .score_candidate(&mut session, submission("Aisha Khan", HOSPITALITY_RESUME))
        .expect("scoring succeeds");
    service
        .score_candidate(&mut session, submission("Armaan Satish", UNRELATED_RESUME))
        .expect("scoring succeeds");

    let matched = &session.records()[0];
    assert_eq!(matched.fit_score, 50.0);
    assert!(matched.matched_criteria.contains("Customer Empathy (hospitality)"));
    assert!(matched.matched_criteria.contains("Arabic"));
    assert!(matched.criteria_weights_json.contains("\"Customer Empathy\":30.0"));

    let unmatched = &session.records()[1];
    assert_eq!(unmatched.fit_score, 0.0);
    assert_eq!(unmatched.matched_criteria, "None");
}

#[test]
fn csv_export_honors_the_column_contract() {
    let service = ScreeningService::new(two_criteria_set());
    let mut session = SessionLog::new();
    service
        .score_candidate(&mut session, submission("Aisha Khan", HOSPITALITY_RESUME))
        .expect("scoring succeeds");

    let csv = session.export_csv().expect("export succeeds");
    let mut lines = csv.lines();

    let header = lines.next().expect("header row present");
    assert_eq!(header, EXPORT_HEADER.join(","));

    let row = lines.next().expect("one data row");
    let record = &session.records()[0];
    assert!(row.contains(&record.candidate_id.0));
    assert!(row.contains("Aisha Khan"));
    assert!(row.contains("50.00"));
    assert!(row.contains("false"));
    assert!(lines.next().is_none());
}

#[test]
fn empty_log_exports_header_only() {
    let session = SessionLog::new();
    let csv = session.export_csv().expect("export succeeds");

    assert_eq!(csv.lines().count(), 1);
    assert!(session.is_empty());
}
