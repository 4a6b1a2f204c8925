//! Candidate screening: keyword scoring with explainability, concierge
//! outreach scripts, and a session-scoped audit trail.
//!
//! Every recruiter interaction is one synchronous pass through the service
//! facade; there is no background work and no state shared across sessions.

pub mod analytics;
pub mod audit;
pub mod domain;
pub mod engine;
pub mod explain;
pub mod extract;
pub(crate) mod normalize;
pub mod router;
pub mod script;
pub mod service;

#[cfg(test)]
mod tests;

pub use analytics::{session_analytics, ScoreBucket, SessionAnalytics};
pub use audit::{AuditExportError, AuditRecord, SessionLog, EXPORT_HEADER};
pub use domain::{
    CandidateId, CriteriaSet, Criterion, MatchDetail, ResumeUpload, ScoreResult,
    ScreeningSubmission,
};
pub use engine::ScoringEngine;
pub use explain::explanation;
pub use extract::{extract_resume, lossy_text, Extraction, ExtractionError};
pub use normalize::normalize_text;
pub use router::{screening_router, ScoreRequest, ScreeningState};
pub use script::{concierge_script, top_strengths, FALLBACK_STRENGTH};
pub use service::{CandidateReport, ScreeningError, ScreeningService};
