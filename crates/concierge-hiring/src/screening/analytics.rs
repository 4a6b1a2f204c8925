use serde::Serialize;

use super::audit::SessionLog;

/// Score bucket labels matching the recruiter dashboard bins.
pub const BUCKET_LABELS: [&str; 3] = ["0-30%", "30-60%", "60-100%"];

/// Read-only rollup of the session audit log for the recruiter console.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionAnalytics {
    pub total_candidates: usize,
    pub emirati_candidates: usize,
    pub emirati_share_pct: f64,
    pub score_distribution: Vec<ScoreBucket>,
    pub average_score_emirati: Option<f64>,
    pub average_score_non_emirati: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBucket {
    pub label: &'static str,
    pub count: usize,
}

pub fn session_analytics(log: &SessionLog) -> SessionAnalytics {
    let records = log.records();
    let total_candidates = records.len();
    let emirati_candidates = records.iter().filter(|record| record.is_emirati).count();
    let emirati_share_pct = if total_candidates == 0 {
        0.0
    } else {
        100.0 * emirati_candidates as f64 / total_candidates as f64
    };

    let mut counts = [0usize; BUCKET_LABELS.len()];
    for record in records {
        counts[bucket_index(record.fit_score)] += 1;
    }
    let score_distribution = BUCKET_LABELS
        .into_iter()
        .zip(counts)
        .map(|(label, count)| ScoreBucket { label, count })
        .collect();

    SessionAnalytics {
        total_candidates,
        emirati_candidates,
        emirati_share_pct,
        score_distribution,
        average_score_emirati: average_where(log, true),
        average_score_non_emirati: average_where(log, false),
    }
}

fn bucket_index(score: f64) -> usize {
    if score <= 30.0 {
        0
    } else if score <= 60.0 {
        1
    } else {
        2
    }
}

fn average_where(log: &SessionLog, is_emirati: bool) -> Option<f64> {
    let scores: Vec<f64> = log
        .records()
        .iter()
        .filter(|record| record.is_emirati == is_emirati)
        .map(|record| record.fit_score)
        .collect();

    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}
