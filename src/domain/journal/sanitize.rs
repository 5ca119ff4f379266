//! Markup stripping for user-supplied text.

use once_cell::sync::Lazy;
use regex::Regex;

static ANGLE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").expect("valid pattern"));
static JAVASCRIPT_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("valid pattern"));
static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on[a-z0-9_]+=").expect("valid pattern"));

/// Removes angle brackets, `javascript:` schemes and `on<event>=` attributes,
/// then trims surrounding whitespace.
pub fn sanitize_text(input: &str) -> String {
    let stripped = ANGLE_BRACKETS.replace_all(input, "");
    let stripped = JAVASCRIPT_SCHEME.replace_all(&stripped, "");
    let stripped = EVENT_HANDLER.replace_all(&stripped, "");
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_only_trimmed() {
        assert_eq!(sanitize_text("  Today was good.\n"), "Today was good.");
    }

    #[test]
    fn angle_brackets_are_removed() {
        assert_eq!(sanitize_text("<script>alert(1)</script>"), "scriptalert(1)/script");
    }

    #[test]
    fn javascript_scheme_is_removed_case_insensitively() {
        assert_eq!(sanitize_text("click JavaScript:run()"), "click run()");
    }

    #[test]
    fn event_handler_attributes_are_removed() {
        assert_eq!(sanitize_text("img onError=steal()"), "img steal()");
        assert_eq!(sanitize_text("onload=x and onclick=y"), "x and y");
    }

    #[test]
    fn markup_only_input_becomes_empty() {
        assert_eq!(sanitize_text(" <> "), "");
    }

    #[test]
    fn ordinary_words_starting_with_on_survive() {
        assert_eq!(sanitize_text("one online only"), "one online only");
    }
}
