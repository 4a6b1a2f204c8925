use super::domain::{CriteriaSet, MatchDetail, ScoreResult};
use super::normalize::normalize_text;

/// Stateless engine applying a criteria rubric to résumé text.
///
/// A criterion earns its full weight when at least one of its keywords occurs
/// as a case-insensitive substring of the normalized text. Multiple matches
/// within one criterion are reported but never award extra credit.
pub struct ScoringEngine {
    criteria: CriteriaSet,
}

impl ScoringEngine {
    pub fn new(criteria: CriteriaSet) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn score(&self, text: &str) -> ScoreResult {
        let haystack = normalize_text(text);
        let mut total = 0.0;
        let mut details = Vec::with_capacity(self.criteria.len());

        for criterion in self.criteria.criteria() {
            let matched: Vec<String> = criterion
                .keywords
                .iter()
                .filter(|keyword| haystack.contains(keyword.to_lowercase().as_str()))
                .cloned()
                .collect();

            if !matched.is_empty() {
                total += criterion.weight;
            }

            details.push(MatchDetail {
                criterion: criterion.name.clone(),
                weight: criterion.weight,
                matched,
            });
        }

        ScoreResult {
            total: round_to_cents(total),
            details,
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
