//! JSON formatting and minification.
//!
//! Both operations parse first and re-serialize, so they never change the
//! represented value, only its whitespace. Object key order is whatever
//! the parser preserved (insertion order for string keys).
//!
//! Unlike [`validate`](crate::validate::validate), a parse failure here is
//! a hard error for the caller: formatting invalid JSON is undefined, so
//! callers validate first or handle the [`EditError::Parse`] explicitly.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{EditError, Result};

/// Supported indentation widths. Only 2 and 4 exist; anything else is a
/// caller error surfaced through [`IndentSize::from_width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IndentSize {
    /// Two columns per nesting level.
    Two,
    /// Four columns per nesting level.
    Four,
}

impl IndentSize {
    /// Convert a numeric width (as persisted in host settings) into an
    /// indent size. Fails with [`EditError::InvalidConfig`] for any width
    /// other than 2 or 4.
    pub fn from_width(width: u8) -> Result<Self> {
        match width {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            other => Err(EditError::InvalidConfig(format!(
                "unsupported indent width {other}, expected 2 or 4"
            ))),
        }
    }

    /// The width in columns.
    pub fn width(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for IndentSize {
    type Error = EditError;

    fn try_from(width: u8) -> Result<Self> {
        Self::from_width(width)
    }
}

impl From<IndentSize> for u8 {
    fn from(size: IndentSize) -> u8 {
        size.width() as u8
    }
}

/// Whether nesting is indented with spaces or tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Indent with [`IndentSize`] space characters per level.
    #[default]
    Spaces,
    /// Indent with a single tab per level, regardless of size.
    Tabs,
}

/// How [`format`] lays out nested structure.
///
/// Serializes with lowercase string styles and numeric sizes, matching the
/// shapes a host settings store persists:
/// `{"indent_size": 2, "indent_style": "spaces"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Columns per nesting level. Ignored for tabs.
    pub indent_size: IndentSize,
    /// Spaces or tabs.
    pub indent_style: IndentStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: IndentSize::Two,
            indent_style: IndentStyle::Spaces,
        }
    }
}

impl FormatOptions {
    /// The literal indent unit written per nesting level: N spaces, or one
    /// tab (tab count is always 1; the size only modifies space width).
    fn indent_unit(&self) -> &'static str {
        match (self.indent_style, self.indent_size) {
            (IndentStyle::Tabs, _) => "\t",
            (IndentStyle::Spaces, IndentSize::Two) => "  ",
            (IndentStyle::Spaces, IndentSize::Four) => "    ",
        }
    }
}

/// Re-serialize JSON text with one indent unit per nesting level.
///
/// Fails with [`EditError::Parse`] when `text` is not valid JSON.
///
/// # Example
///
/// ```
/// use json_edit_core::format::{format, FormatOptions};
///
/// let pretty = format(r#"{"a":1,"b":{"c":2}}"#, &FormatOptions::default()).unwrap();
/// assert_eq!(pretty, "{\n  \"a\": 1,\n  \"b\": {\n    \"c\": 2\n  }\n}");
/// ```
pub fn format(text: &str, options: &FormatOptions) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    let formatter = PrettyFormatter::with_indent(options.indent_unit().as_bytes());
    let mut out = Vec::with_capacity(text.len() * 2);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(out).expect("serializer emits UTF-8"))
}

/// Re-serialize JSON text with no whitespace at all.
///
/// Fails with [`EditError::Parse`] when `text` is not valid JSON.
///
/// # Example
///
/// ```
/// use json_edit_core::format::minify;
///
/// assert_eq!(minify("{\n  \"a\": 1\n}").unwrap(), r#"{"a":1}"#);
/// ```
pub fn minify(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(value.to_string())
}
