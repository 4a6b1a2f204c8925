use super::domain::MatchDetail;

/// Placeholder strength used when no criterion matched at all.
pub const FALLBACK_STRENGTH: &str = "service mindset";

/// First `limit` matched criterion names in rubric order, falling back to a
/// single placeholder when nothing matched.
pub fn top_strengths(details: &[MatchDetail], limit: usize) -> Vec<String> {
    let picked: Vec<String> = details
        .iter()
        .filter(|detail| detail.is_match())
        .take(limit)
        .map(|detail| detail.criterion.clone())
        .collect();

    if picked.is_empty() {
        vec![FALLBACK_STRENGTH.to_string()]
    } else {
        picked
    }
}

/// Three-part concierge call script: greeting, strengths summary, and call to
/// action. Pure string interpolation.
pub fn concierge_script(candidate_name: &str, role_title: &str, top_strengths: &[String]) -> String {
    let opener = format!(
        "Hello {candidate_name}, this is the Talent Concierge. Thanks for your interest in the {role_title} role."
    );
    let body = format!(
        "We focus on service excellence and multicultural teamwork. Your background stood out for: {}.",
        top_strengths.join(", ")
    );
    let close = "I'd love to walk you through the role expectations and answer your questions. Would you prefer a quick 15-minute call or a 25-minute deep-dive?";

    format!("{opener}\n\n{body}\n\n{close}")
}
