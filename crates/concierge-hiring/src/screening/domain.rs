use serde::{Deserialize, Serialize};

/// Identifier wrapper for scored candidates (8 hex chars, unique per session).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// A named, weighted requirement triggered by any of its keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    pub keywords: Vec<String>,
}

impl Criterion {
    pub fn new(name: &str, weight: f64, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            weight,
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        }
    }
}

/// Ordered scoring rubric. Weights are hinted to total 100 for display but the
/// sum is never enforced, so totals can exceed the nominal scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// The five-criterion Guest Experience Supervisor rubric used for demos
    /// and as the service default.
    pub fn standard() -> Self {
        Self::new(vec![
            Criterion::new(
                "Customer Empathy",
                30.0,
                &[
                    "customer empathy",
                    "guest experience",
                    "service excellence",
                    "hospitality",
                ],
            ),
            Criterion::new(
                "Arabic / Multilingual",
                20.0,
                &["arabic", "bilingual", "multilingual"],
            ),
            Criterion::new(
                "Retail/Hospitality Ops",
                20.0,
                &[
                    "retail operations",
                    "hospitality operations",
                    "pos",
                    "front office",
                ],
            ),
            Criterion::new(
                "Stakeholder Management",
                15.0,
                &[
                    "stakeholder management",
                    "cross-functional",
                    "vendor management",
                ],
            ),
            Criterion::new(
                "Analytics & Reporting",
                15.0,
                &["excel", "analytics", "reporting", "dashboard", "kpi"],
            ),
        ])
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Displayed hint only; nothing prevents rubrics that sum past 100.
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|criterion| criterion.weight).sum()
    }

    /// Criterion name -> weight map serialized for the audit trail.
    pub fn weights_json(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .criteria
            .iter()
            .map(|criterion| {
                (
                    criterion.name.clone(),
                    serde_json::Value::from(criterion.weight),
                )
            })
            .collect();
        serde_json::Value::Object(map).to_string()
    }
}

/// Per-criterion match outcome. `matched` lists every keyword that appeared,
/// even though the weight is awarded at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub criterion: String,
    pub weight: f64,
    pub matched: Vec<String>,
}

impl MatchDetail {
    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Scoring engine output: total fit score plus the per-criterion trail, in
/// rubric order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total: f64,
    pub details: Vec<MatchDetail>,
}

impl ScoreResult {
    /// Human-readable summary of the criteria that contributed, e.g.
    /// `"Customer Empathy (hospitality); Arabic / Multilingual (arabic)"`,
    /// or `"None"` when nothing matched.
    pub fn matched_summary(&self) -> String {
        let parts: Vec<String> = self
            .details
            .iter()
            .filter(|detail| detail.is_match())
            .map(|detail| format!("{} ({})", detail.criterion, detail.matched.join(", ")))
            .collect();

        if parts.is_empty() {
            "None".to_string()
        } else {
            parts.join("; ")
        }
    }
}

/// Résumé payload supplied by the caller: either pre-extracted text or raw
/// upload bytes that still need decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeUpload {
    Text(String),
    File { name: String, data: Vec<u8> },
}

/// One scoring request as captured from the recruiter form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningSubmission {
    pub candidate_name: String,
    pub role_title: String,
    pub is_emirati: bool,
    pub resume: ResumeUpload,
}
