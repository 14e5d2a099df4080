//! Conversion of free-text labels into identifier-safe names.

use std::sync::OnceLock;

use regex::Regex;

/// Characters that may not appear in an identifier.
const INVALID_IDENTIFIER_CHARS: &str = r"[^A-Za-z0-9_]";

fn invalid_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INVALID_IDENTIFIER_CHARS).expect("identifier pattern is valid"))
}

/// Normalizes a label into an identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, one underscore per
/// character (so `"Thing!!"` becomes `"Thing__"`). Returns `None` for absent
/// or empty input. The result only depends on the input text.
pub fn sanitize(text: Option<&str>) -> Option<String> {
    let text = text?;
    if text.is_empty() {
        return None;
    }
    let sanitized = invalid_chars().replace_all(text, "_").into_owned();
    (!sanitized.is_empty()).then_some(sanitized)
}

/// Returns true if `name` is non-empty and only contains `[A-Za-z0-9_]`.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && !invalid_chars().is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(sanitize(None), None);
        assert_eq!(sanitize(Some("")), None);
    }

    #[test]
    fn test_replaces_each_invalid_char() {
        assert_eq!(sanitize(Some("Thing!!")).as_deref(), Some("Thing__"));
        assert_eq!(sanitize(Some("has part")).as_deref(), Some("has_part"));
        assert_eq!(sanitize(Some("a-b.c")).as_deref(), Some("a_b_c"));
        assert_eq!(sanitize(Some("Person")).as_deref(), Some("Person"));
    }

    #[test]
    fn test_all_punctuation_still_yields_underscores() {
        assert_eq!(sanitize(Some("!?")).as_deref(), Some("__"));
    }

    #[test]
    fn test_non_ascii_is_replaced_per_char() {
        assert_eq!(sanitize(Some("Кот")).as_deref(), Some("___"));
        assert_eq!(sanitize(Some("café")).as_deref(), Some("caf_"));
    }

    #[test]
    fn test_idempotent() {
        for input in ["Thing!!", "a b c", "ok_1", "Ünïcödé", "   ", "x\ty\nz"] {
            let once = sanitize(Some(input)).unwrap();
            let twice = sanitize(Some(&once)).unwrap();
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    #[test]
    fn test_output_is_identifier() {
        for input in ["Thing!!", "<tag>", "a/b\\c", "emoji 🚗", "123"] {
            let out = sanitize(Some(input)).unwrap();
            assert!(is_identifier(&out), "{out:?} from {input:?}");
        }
    }
}
