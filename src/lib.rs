//! # JSON Edit Core
//!
//! The editing core of a JSON editor: validation with line/column
//! diagnostics, configurable formatting, heuristic repair of hand-editing
//! mistakes, and debounced revalidation as the buffer changes.
//!
//! The editor surface itself (rendering, cursors, undo) is out of scope;
//! this crate is what runs *behind* it. Hosts feed buffer text in and get
//! diagnostics, formatted text, or repaired text back. Parsing is delegated
//! to `serde_json`; there is no hand-rolled tokenizer here.
//!
//! ## Core Concepts
//!
//! - **[`validate`](validate())** — parse a buffer, report at most one
//!   structured [`Diagnostic`] per pass. Never fails: malformed input
//!   becomes a diagnostic, an empty buffer is simply valid.
//! - **[`format`](format()) / [`minify`]** — re-serialize with a configurable indent
//!   unit, or with no whitespace at all. Invalid input is a hard
//!   [`EditError`] here; validate first.
//! - **[`try_fix`]** — bounded textual repair of common mistakes (bare
//!   keys, trailing commas, single quotes). Returns the input unchanged
//!   when no fix validates.
//! - **[`ValidationController`]** — trailing-debounce wrapper that re-runs
//!   validation once per idle window and pushes state to registered
//!   [`ValidationObserver`]s.
//!
//! ## Quick Start
//!
//! ```
//! use json_edit_core::{format, minify, try_fix, validate, FormatOptions};
//!
//! // Validation never throws; diagnostics carry 1-based positions.
//! let result = validate(r#"{"a": 1,}"#);
//! assert!(!result.is_valid());
//! assert_eq!(result.errors[0].line, 1);
//!
//! // Repair the obvious, then format.
//! let fixed = try_fix(r#"{"a": 1,}"#);
//! let pretty = format(&fixed, &FormatOptions::default()).unwrap();
//! assert_eq!(pretty, "{\n  \"a\": 1\n}");
//! assert_eq!(minify(&pretty).unwrap(), r#"{"a":1}"#);
//! ```
//!
//! ## Debounced validation
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use json_edit_core::controller::{ValidationController, ValidationState};
//! use json_edit_core::events::FnObserver;
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = ValidationController::builder()
//!         .delay(Duration::from_millis(300))
//!         .observer(Arc::new(FnObserver(|state: &ValidationState| {
//!             println!("{} diagnostic(s)", state.errors.len());
//!         })))
//!         .build();
//!
//!     // Wire this to the editor's change event. Bursts collapse to one
//!     // validation of the latest text.
//!     controller.on_content_change(r#"{"a": "#);
//!     controller.on_content_change(r#"{"a": 1}"#);
//! }
//! ```

pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod format;
pub mod repair;
pub mod validate;

pub use controller::{ValidationController, ValidationControllerBuilder, ValidationState};
pub use diagnostics::{Diagnostic, Severity, ValidationResult};
pub use error::{EditError, Result};
pub use events::{FnObserver, ValidationObserver};
pub use format::{format, minify, FormatOptions, IndentSize, IndentStyle};
pub use repair::try_fix;
pub use validate::{position_at, validate};
