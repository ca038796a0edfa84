//! Diagnostic types produced by JSON validation.
//!
//! [`Diagnostic`] records one syntax problem at a 1-based line/column
//! position, the addressing convention used by editor marker layers.
//! [`ValidationResult`] is the outcome of a single validation pass; its
//! diagnostics fully replace those of the previous pass, never merge.

use serde::{Deserialize, Serialize};

/// How serious a diagnostic is.
///
/// Parser-sourced diagnostics are always [`Severity::Error`]: the native
/// parser only ever fails fatally. [`Severity::Warning`] is reserved for
/// advisory conditions such as "document too large, validation skipped".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The document could not be parsed.
    Error,
    /// Advisory only; the document is not known to be invalid.
    Warning,
}

/// One JSON syntax problem.
///
/// # Example
///
/// ```
/// use json_edit_core::diagnostics::{Diagnostic, Severity};
///
/// let diag = Diagnostic::error(1, 9, "expected value at line 1 column 9");
/// assert_eq!(diag.severity, Severity::Error);
/// assert_eq!((diag.line, diag.column), (1, 9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number where the problem was detected.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// Human-readable description, taken verbatim from the parser where
    /// available.
    pub message: String,
    /// Error for parse failures, Warning for advisory conditions.
    pub severity: Severity,
}

impl Diagnostic {
    /// Build an error diagnostic at the given 1-based position.
    pub fn error(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Build a warning diagnostic at the given 1-based position.
    pub fn warning(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Outcome of a single validation pass.
///
/// Validity is derived from the diagnostic list rather than stored, so the
/// two can never disagree: a pass with no error-severity diagnostics is
/// valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Diagnostics from this pass. Empty for a successfully parsed buffer.
    pub errors: Vec<Diagnostic>,
}

impl ValidationResult {
    /// A pass that found nothing wrong.
    pub fn valid() -> Self {
        Self::default()
    }

    /// A pass that produced a single diagnostic.
    pub fn with_diagnostic(diagnostic: Diagnostic) -> Self {
        Self {
            errors: vec![diagnostic],
        }
    }

    /// Whether the buffer parsed. Warning-only results count as valid.
    pub fn is_valid(&self) -> bool {
        !self.errors.iter().any(|d| d.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn error_diagnostic_invalidates() {
        let result = ValidationResult::with_diagnostic(Diagnostic::error(2, 5, "trailing comma"));
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn warning_only_result_stays_valid() {
        let result =
            ValidationResult::with_diagnostic(Diagnostic::warning(1, 1, "validation skipped"));
        assert!(result.is_valid());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn diagnostic_round_trips_through_serde() {
        let diag = Diagnostic::error(3, 14, "expected `,` or `}`");
        let json = serde_json::to_string(&diag).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, diag);
    }
}
