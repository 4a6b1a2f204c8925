use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::audit::{next_candidate_id, AuditRecord, SessionLog};
use super::domain::{CandidateId, CriteriaSet, MatchDetail, ScreeningSubmission};
use super::engine::ScoringEngine;
use super::explain::explanation;
use super::extract::{extract_resume, lossy_text, Extraction};
use super::normalize::normalize_text;
use super::script::{concierge_script, top_strengths};

pub const DEFAULT_TOP_STRENGTHS: usize = 2;

/// Facade running one synchronous screening pass per interaction:
/// extract -> normalize -> score -> explain -> script -> audit append.
pub struct ScreeningService {
    engine: ScoringEngine,
    top_strengths: usize,
}

impl ScreeningService {
    pub fn new(criteria: CriteriaSet) -> Self {
        Self::with_top_strengths(criteria, DEFAULT_TOP_STRENGTHS)
    }

    pub fn with_top_strengths(criteria: CriteriaSet, top_strengths: usize) -> Self {
        Self {
            engine: ScoringEngine::new(criteria),
            top_strengths,
        }
    }

    pub fn criteria(&self) -> &CriteriaSet {
        self.engine.criteria()
    }

    /// Score one candidate against the service rubric, appending exactly one
    /// audit record on success. Validation failures abort before any state
    /// is mutated.
    pub fn score_candidate(
        &self,
        session: &mut SessionLog,
        submission: ScreeningSubmission,
    ) -> Result<CandidateReport, ScreeningError> {
        self.run(&self.engine, session, submission)
    }

    /// Same pass with a caller-supplied rubric (recruiter-adjusted weights).
    pub fn score_with_criteria(
        &self,
        session: &mut SessionLog,
        criteria: CriteriaSet,
        submission: ScreeningSubmission,
    ) -> Result<CandidateReport, ScreeningError> {
        let engine = ScoringEngine::new(criteria);
        self.run(&engine, session, submission)
    }

    fn run(
        &self,
        engine: &ScoringEngine,
        session: &mut SessionLog,
        submission: ScreeningSubmission,
    ) -> Result<CandidateReport, ScreeningError> {
        validate_rubric(engine.criteria())?;

        let candidate_name = submission.candidate_name.trim();
        if candidate_name.is_empty() {
            return Err(ScreeningError::MissingCandidateName);
        }

        let role_title = submission.role_title.trim();
        if role_title.is_empty() {
            return Err(ScreeningError::MissingRoleTitle);
        }

        let text = match extract_resume(&submission.resume) {
            Extraction::Extracted(text) => text,
            Extraction::Failed(reason) => {
                warn!(%reason, candidate = candidate_name, "resume extraction failed, falling back to utf-8 decode");
                lossy_text(&submission.resume)
            }
        };

        if normalize_text(&text).is_empty() {
            return Err(ScreeningError::EmptyResume);
        }

        let result = engine.score(&text);
        let explanation = explanation(&result.details);
        let strengths = top_strengths(&result.details, self.top_strengths);
        let script = concierge_script(candidate_name, role_title, &strengths);

        let timestamp = Utc::now();
        let candidate_id = next_candidate_id(candidate_name, timestamp);
        session.append(AuditRecord {
            timestamp,
            candidate_id: candidate_id.clone(),
            candidate_name: candidate_name.to_string(),
            is_emirati: submission.is_emirati,
            role_title: role_title.to_string(),
            fit_score: result.total,
            matched_criteria: result.matched_summary(),
            criteria_weights_json: engine.criteria().weights_json(),
        });

        info!(
            candidate_id = %candidate_id.0,
            fit_score = result.total,
            "candidate scored"
        );

        Ok(CandidateReport {
            candidate_id,
            fit_score: result.total,
            details: result.details,
            explanation,
            top_strengths: strengths,
            script,
        })
    }
}

/// Everything the recruiter console shows for one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateReport {
    pub candidate_id: CandidateId,
    pub fit_score: f64,
    pub details: Vec<MatchDetail>,
    pub explanation: String,
    pub top_strengths: Vec<String>,
    pub script: String,
}

/// Criterion weights must be finite and non-negative so the fit score never
/// drops below zero. Checked here rather than at construction so rubrics
/// deserialized from requests get the same treatment as built-in ones.
fn validate_rubric(criteria: &CriteriaSet) -> Result<(), ScreeningError> {
    for criterion in criteria.criteria() {
        if !criterion.weight.is_finite() || criterion.weight < 0.0 {
            return Err(ScreeningError::InvalidCriterionWeight {
                criterion: criterion.name.clone(),
                weight: criterion.weight,
            });
        }
    }
    Ok(())
}

/// Validation errors for a single scoring interaction. All are terminal for
/// that interaction and require corrected input; none are fatal.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ScreeningError {
    #[error("candidate name is required")]
    MissingCandidateName,
    #[error("role title is required")]
    MissingRoleTitle,
    #[error("resume text was empty after extraction; upload a readable resume")]
    EmptyResume,
    #[error("criterion \"{criterion}\" has invalid weight {weight}; weights must be finite and non-negative")]
    InvalidCriterionWeight { criterion: String, weight: f64 },
}
