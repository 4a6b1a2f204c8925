use crate::screening::domain::{
    CriteriaSet, Criterion, ResumeUpload, ScreeningSubmission,
};

pub(super) fn empathy_criterion(weight: f64) -> Criterion {
    Criterion::new(
        "Customer Empathy",
        weight,
        &["customer empathy", "hospitality"],
    )
}

pub(super) fn arabic_criterion(weight: f64) -> Criterion {
    Criterion::new("Arabic", weight, &["arabic", "bilingual"])
}

pub(super) fn two_criteria_set() -> CriteriaSet {
    CriteriaSet::new(vec![empathy_criterion(30.0), arabic_criterion(20.0)])
}

pub(super) fn submission(candidate_name: &str, resume_text: &str) -> ScreeningSubmission {
    ScreeningSubmission {
        candidate_name: candidate_name.to_string(),
        role_title: "Guest Experience Supervisor".to_string(),
        is_emirati: false,
        resume: ResumeUpload::Text(resume_text.to_string()),
    }
}

pub(super) const HOSPITALITY_RESUME: &str =
    "Experienced in hospitality services with bilingual Arabic and English fluency.";

pub(super) const UNRELATED_RESUME: &str =
    "Fluent in French and English, focused on embedded firmware development.";
