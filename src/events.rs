//! Observer hooks for the validation controller.
//!
//! An optional, non-intrusive way to watch debounced validation. The
//! controller pushes a [`ValidationState`] snapshot to every registered
//! observer after each completed pass; the diagnostics-sink side of an
//! editor host (marker layer, status bar, logger) implements
//! [`ValidationObserver`] to receive them. Collaborators are passed in
//! explicitly at construction; there is no ambient registry.

use std::sync::Arc;

use crate::controller::ValidationState;

/// Receiver for validation state updates.
///
/// Implement this for the host's diagnostics sink. Observers run on the
/// controller's timer task, so keep them quick; hand off to the UI thread
/// if rendering is involved.
///
/// # Example
///
/// ```
/// use json_edit_core::controller::ValidationState;
/// use json_edit_core::events::ValidationObserver;
///
/// struct PrintSink;
///
/// impl ValidationObserver for PrintSink {
///     fn on_validation(&self, state: &ValidationState) {
///         for diag in &state.errors {
///             println!("{}:{}: {}", diag.line, diag.column, diag.message);
///         }
///     }
/// }
/// ```
pub trait ValidationObserver: Send + Sync {
    /// Called after every completed validation pass with the new state.
    fn on_validation(&self, state: &ValidationState);
}

/// Push a state snapshot to every observer. No-op for an empty list.
pub(crate) fn notify(observers: &[Arc<dyn ValidationObserver>], state: &ValidationState) {
    for observer in observers {
        observer.on_validation(state);
    }
}

/// A [`ValidationObserver`] backed by a closure.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use json_edit_core::controller::ValidationState;
/// use json_edit_core::events::FnObserver;
///
/// let observer = Arc::new(FnObserver(|state: &ValidationState| {
///     println!("valid: {}", state.is_valid());
/// }));
/// ```
pub struct FnObserver<F: Fn(&ValidationState) + Send + Sync>(pub F);

impl<F: Fn(&ValidationState) + Send + Sync> ValidationObserver for FnObserver<F> {
    fn on_validation(&self, state: &ValidationState) {
        (self.0)(state);
    }
}
