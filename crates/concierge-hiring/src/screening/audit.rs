use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::domain::CandidateId;

/// One logged scoring event, kept for transparency and bias review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: DateTime<Utc>,
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub is_emirati: bool,
    pub role_title: String,
    pub fit_score: f64,
    pub matched_criteria: String,
    pub criteria_weights_json: String,
}

static SCORING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Short identifier derived from the candidate name and scoring timestamp.
/// A process-local sequence is mixed in so repeated scorings of the same name
/// within one second still get distinct ids.
pub fn next_candidate_id(candidate_name: &str, timestamp: DateTime<Utc>) -> CandidateId {
    let sequence = SCORING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let mut hasher = Sha256::new();
    hasher.update(candidate_name.as_bytes());
    hasher.update(timestamp.to_rfc3339().as_bytes());
    hasher.update(sequence.to_be_bytes());
    let digest = hasher.finalize();
    CandidateId(format!("{digest:x}")[..8].to_string())
}

/// Column order is a compatibility contract for anything consuming the export.
pub const EXPORT_HEADER: [&str; 8] = [
    "timestamp",
    "candidate_id",
    "candidate_name",
    "is_emirati",
    "role_title",
    "fit_score",
    "matched_criteria",
    "criteria_weights_json",
];

/// Append-only audit trail scoped to one interactive session.
///
/// Owned by the calling context (server state or a CLI run) and dropped with
/// it; nothing is ever persisted across restarts. Prior records are never
/// mutated or deduplicated.
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    records: Vec<AuditRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: AuditRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the log as CSV with the fixed [`EXPORT_HEADER`] columns.
    pub fn export_csv(&self) -> Result<String, AuditExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(EXPORT_HEADER)?;

        for record in &self.records {
            writer.write_record(&[
                record.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
                record.candidate_id.0.clone(),
                record.candidate_name.clone(),
                record.is_emirati.to_string(),
                record.role_title.clone(),
                format!("{:.2}", record.fit_score),
                record.matched_criteria.clone(),
                record.criteria_weights_json.clone(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| AuditExportError::Flush(err.to_string()))?;
        String::from_utf8(bytes).map_err(|err| AuditExportError::Flush(err.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuditExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv writer flush failed: {0}")]
    Flush(String),
}
