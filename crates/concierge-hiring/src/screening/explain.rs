use super::domain::MatchDetail;

/// Render one explainability line per criterion, preserving rubric order.
/// Matched criteria show the triggering keywords and the awarded weight;
/// unmatched criteria get an explicit no-match marker.
pub fn explanation(details: &[MatchDetail]) -> String {
    details
        .iter()
        .map(explanation_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn explanation_line(detail: &MatchDetail) -> String {
    if detail.is_match() {
        format!(
            "• {}: matched {} (+{:.1})",
            detail.criterion,
            detail.matched.join(", "),
            detail.weight
        )
    } else {
        format!("• {}: no match (+0)", detail.criterion)
    }
}
