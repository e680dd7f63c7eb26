/// Source tag used when the hosting page carries no `source` query parameter.
pub const DEFAULT_SOURCE: &str = "FeedbackApp";

/// Resolves the submission's `source` from the page's `source` query value.
///
/// Absent, empty and whitespace-only values all fall back to [`DEFAULT_SOURCE`].
pub fn resolve_source(query_value: Option<&str>) -> String {
    query_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_SOURCE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_uses_default() {
        assert_eq!(resolve_source(None), "FeedbackApp");
    }

    #[test]
    fn blank_parameter_uses_default() {
        assert_eq!(resolve_source(Some("")), DEFAULT_SOURCE);
        assert_eq!(resolve_source(Some("   ")), DEFAULT_SOURCE);
    }

    #[test]
    fn parameter_is_passed_through() {
        assert_eq!(resolve_source(Some("MobileApp")), "MobileApp");
    }
}
