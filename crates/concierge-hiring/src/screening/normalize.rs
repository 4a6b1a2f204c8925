/// Collapse whitespace runs to single spaces, trim, and lowercase. Total over
/// any input; empty input stays empty.
pub fn normalize_text(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}
