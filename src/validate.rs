//! JSON validation with line/column diagnostics.
//!
//! [`validate`] parses a text buffer with `serde_json` and converts the
//! parser's failure into a single structured [`Diagnostic`]. It has no
//! fatal-error path: any malformed input becomes a diagnostic, never a
//! returned `Err` or a panic.

use crate::diagnostics::{Diagnostic, ValidationResult};

/// Validate a text buffer as JSON.
///
/// An empty or whitespace-only buffer is treated as valid with no
/// diagnostics. Strict JSON rejects empty input, but a fresh editor buffer
/// should not light up red, so that case never reaches the parser.
///
/// For anything else the buffer is handed to `serde_json`. On failure the
/// parser reports a 1-based line and column directly; those are carried
/// into the diagnostic along with the parser's message verbatim. Should the
/// reported position ever be zeroed (non-syntax error categories), the
/// diagnostic falls back to line 1, column 1 rather than failing the call.
///
/// There is at most one diagnostic per pass: the parser stops at the first
/// syntax error, and that behavior is preserved here.
///
/// # Examples
///
/// ```
/// use json_edit_core::validate;
///
/// assert!(validate(r#"{"a": 1, "b": 2}"#).is_valid());
/// assert!(validate("").is_valid());
///
/// let result = validate(r#"{"a": 1,}"#);
/// assert!(!result.is_valid());
/// assert_eq!(result.errors.len(), 1);
/// assert_eq!(result.errors[0].line, 1);
/// ```
pub fn validate(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult::valid();
    }

    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => ValidationResult::valid(),
        Err(err) => {
            let (line, column) = if err.line() == 0 {
                (1, 1)
            } else {
                (err.line() as u32, (err.column().max(1)) as u32)
            };
            ValidationResult::with_diagnostic(Diagnostic::error(line, column, err.to_string()))
        }
    }
}

/// Convert a zero-based character offset into the 1-based (line, column)
/// addressing used by [`Diagnostic`](crate::diagnostics::Diagnostic).
///
/// For hosts whose editing surface reports positions as flat character
/// offsets. Offsets past the end of the text saturate at the final
/// position.
///
/// # Example
///
/// ```
/// use json_edit_core::validate::position_at;
///
/// assert_eq!(position_at("{\n  \"a\": 1\n}", 0), (1, 1));
/// assert_eq!(position_at("{\n  \"a\": 1\n}", 4), (2, 3));
/// ```
pub fn position_at(text: &str, offset: usize) -> (u32, u32) {
    let mut line = 1u32;
    let mut column = 1u32;
    for (i, ch) in text.chars().enumerate() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    #[test]
    fn valid_object() {
        let result = validate(r#"{"a": 1, "b": 2}"#);
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn valid_scalar_and_array() {
        assert!(validate("42").is_valid());
        assert!(validate("[1, 2, 3]").is_valid());
        assert!(validate("\"hello\"").is_valid());
        assert!(validate("null").is_valid());
    }

    #[test]
    fn empty_buffer_is_valid() {
        let result = validate("");
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn whitespace_only_is_valid() {
        let result = validate("   \n\t ");
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn trailing_comma_produces_single_error() {
        let result = validate(r#"{"a": 1,}"#);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);

        let diag = &result.errors[0];
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.line, 1);
        // The parser flags the `}` that follows the comma.
        assert_eq!(diag.column, 9);
        assert!(!diag.message.is_empty());
    }

    #[test]
    fn error_on_later_line_is_located() {
        let text = "{\n  \"a\": 1,\n  \"b\": oops\n}";
        let result = validate(text);
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line, 3);
        assert!(result.errors[0].column >= 1);
    }

    #[test]
    fn garbage_is_one_diagnostic_not_a_panic() {
        for text in ["not json at all", "{{{{", "}", "\u{0}", "{\"a\""] {
            let result = validate(text);
            assert_eq!(result.errors.len(), 1, "input: {text:?}");
            assert!(result.errors[0].line >= 1);
            assert!(result.errors[0].column >= 1);
        }
    }

    #[test]
    fn position_at_start_and_first_line() {
        assert_eq!(position_at("abc", 0), (1, 1));
        assert_eq!(position_at("abc", 2), (1, 3));
    }

    #[test]
    fn position_at_crosses_newlines() {
        let text = "ab\ncd\nef";
        assert_eq!(position_at(text, 3), (2, 1));
        assert_eq!(position_at(text, 4), (2, 2));
        assert_eq!(position_at(text, 6), (3, 1));
    }

    #[test]
    fn position_at_saturates_past_end() {
        assert_eq!(position_at("ab", 100), (1, 3));
        assert_eq!(position_at("", 5), (1, 1));
    }
}
