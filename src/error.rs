use thiserror::Error;

/// Errors produced by the editing core.
///
/// Validation never surfaces here: malformed input is reported as a
/// [`Diagnostic`](crate::diagnostics::Diagnostic), not an error. This enum
/// covers the operations that genuinely fail: formatting text that does not
/// parse, and invalid caller configuration.
#[derive(Error, Debug)]
pub enum EditError {
    /// The text is not valid JSON. Formatting and minification require a
    /// parseable document; callers are expected to validate first or handle
    /// this explicitly.
    #[error("cannot format invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid configuration detected at call time (e.g. an unsupported
    /// indent width).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EditError>;
