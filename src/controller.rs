//! Debounced revalidation for an editing buffer.
//!
//! [`ValidationController`] wraps the validator in a trailing-debounce
//! timer: every buffer change (re)starts the idle window, and only the
//! most recent text in a burst is validated once the window elapses.
//! Validation itself is synchronous and cheap; the only temporal element
//! is the timer, driven by `tokio::time`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::diagnostics::{Diagnostic, Severity, ValidationResult};
use crate::events::{notify, ValidationObserver};
use crate::validate::validate;

/// Validator function the controller runs against the buffer.
pub type ValidatorFn = Arc<dyn Fn(&str) -> ValidationResult + Send + Sync>;

/// Idle window applied when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Snapshot of the controller's observable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    /// Diagnostics from the most recent completed pass.
    pub errors: Vec<Diagnostic>,
    /// Whether a pass is scheduled but has not run yet.
    pub is_validating: bool,
}

impl ValidationState {
    /// Whether the buffer is known valid. Warning-only states count as
    /// valid, mirroring [`ValidationResult::is_valid`].
    pub fn is_valid(&self) -> bool {
        !self.errors.iter().any(|d| d.severity == Severity::Error)
    }
}

struct Shared {
    /// Bumped on every content change; a timer task only runs its pass if
    /// its generation is still current, so superseded timers fall through.
    generation: u64,
    pending_text: String,
    state: ValidationState,
}

struct Inner {
    validator: ValidatorFn,
    delay: Duration,
    max_len: Option<usize>,
    observers: Vec<Arc<dyn ValidationObserver>>,
    shared: Mutex<Shared>,
}

impl Inner {
    fn lock(&self) -> std::sync::MutexGuard<'_, Shared> {
        self.shared.lock().expect("controller state lock poisoned")
    }

    /// Run the pass scheduled under `generation`, unless a newer content
    /// change superseded it.
    fn run_if_current(&self, generation: u64) {
        let text = {
            let shared = self.lock();
            if shared.generation != generation {
                return;
            }
            shared.pending_text.clone()
        };

        let result = self.check(&text);

        let state = {
            let mut shared = self.lock();
            if shared.generation != generation {
                return;
            }
            shared.state = ValidationState {
                errors: result.errors,
                is_validating: false,
            };
            shared.state.clone()
        };
        notify(&self.observers, &state);
    }

    fn check(&self, text: &str) -> ValidationResult {
        if let Some(max) = self.max_len {
            if text.len() > max {
                return ValidationResult::with_diagnostic(Diagnostic::warning(
                    1,
                    1,
                    format!("document exceeds {max} bytes; validation skipped"),
                ));
            }
        }
        (self.validator)(text)
    }
}

/// Debounce controller around a validator.
///
/// Construct with [`ValidationController::builder`]; feed it every buffer
/// change via [`on_content_change`](Self::on_content_change). Requires a
/// tokio runtime (the host's event loop) to drive the idle timer.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use json_edit_core::controller::ValidationController;
/// use json_edit_core::events::FnObserver;
///
/// #[tokio::main]
/// async fn main() {
///     let controller = ValidationController::builder()
///         .delay(Duration::from_millis(300))
///         .observer(Arc::new(FnObserver(|state: &json_edit_core::controller::ValidationState| {
///             println!("valid: {}, {} diagnostic(s)", state.is_valid(), state.errors.len());
///         })))
///         .build();
///
///     controller.on_content_change(r#"{"a": 1,}"#);
///     tokio::time::sleep(Duration::from_millis(400)).await;
///     assert!(!controller.is_valid());
/// }
/// ```
pub struct ValidationController {
    inner: Arc<Inner>,
}

impl ValidationController {
    /// Create a builder with the default idle window.
    pub fn builder() -> ValidationControllerBuilder {
        ValidationControllerBuilder {
            delay: DEFAULT_DEBOUNCE,
            validator: None,
            max_len: None,
            observers: Vec::new(),
        }
    }

    /// Controller with the given idle window and the standard validator.
    pub fn new(delay: Duration) -> Self {
        Self::builder().delay(delay).build()
    }

    /// Record a buffer change and (re)start the idle timer.
    ///
    /// Trailing debounce: each call supersedes any still-pending pass, so a
    /// burst of calls validates once, against the last text supplied.
    /// Empty and whitespace-only text updates state synchronously; a
    /// trivially valid fresh buffer should not wait out the window.
    pub fn on_content_change(&self, text: &str) {
        if text.trim().is_empty() {
            let state = {
                let mut shared = self.inner.lock();
                shared.generation += 1;
                shared.pending_text.clear();
                shared.state = ValidationState::default();
                shared.state.clone()
            };
            notify(&self.inner.observers, &state);
            return;
        }

        let generation = {
            let mut shared = self.inner.lock();
            shared.generation += 1;
            shared.pending_text.clear();
            shared.pending_text.push_str(text);
            shared.state.is_validating = true;
            shared.generation
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.delay).await;
            inner.run_if_current(generation);
        });
    }

    /// Current state snapshot.
    pub fn state(&self) -> ValidationState {
        self.inner.lock().state.clone()
    }

    /// Diagnostics from the most recent completed pass.
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.state().errors
    }

    /// Whether the buffer is known valid as of the last completed pass.
    pub fn is_valid(&self) -> bool {
        self.state().is_valid()
    }
}

/// Builder for [`ValidationController`].
pub struct ValidationControllerBuilder {
    delay: Duration,
    validator: Option<ValidatorFn>,
    max_len: Option<usize>,
    observers: Vec<Arc<dyn ValidationObserver>>,
}

impl ValidationControllerBuilder {
    /// Set the idle window. Default: [`DEFAULT_DEBOUNCE`].
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the standard validator, e.g. to stub validation in tests or
    /// to layer schema checks on top of syntax checks.
    pub fn validator(
        mut self,
        f: impl Fn(&str) -> ValidationResult + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Arc::new(f));
        self
    }

    /// Register an observer for completed passes.
    pub fn observer(mut self, observer: Arc<dyn ValidationObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Skip parsing for buffers larger than `bytes` and publish a single
    /// warning diagnostic instead.
    pub fn max_len(mut self, bytes: usize) -> Self {
        self.max_len = Some(bytes);
        self
    }

    /// Build the controller.
    pub fn build(self) -> ValidationController {
        ValidationController {
            inner: Arc::new(Inner {
                validator: self.validator.unwrap_or_else(|| Arc::new(validate)),
                delay: self.delay,
                max_len: self.max_len,
                observers: self.observers,
                shared: Mutex::new(Shared {
                    generation: 0,
                    pending_text: String::new(),
                    state: ValidationState::default(),
                }),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::events::FnObserver;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DELAY: Duration = Duration::from_millis(100);

    /// Let spawned timer tasks run to completion on the current-thread
    /// test runtime.
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    /// Counts validator runs and records the last text validated.
    struct Probe {
        runs: AtomicUsize,
        last: Mutex<String>,
    }

    impl Probe {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                runs: AtomicUsize::new(0),
                last: Mutex::new(String::new()),
            })
        }

        fn install(self: &Arc<Self>, builder: ValidationControllerBuilder) -> ValidationController {
            let probe = Arc::clone(self);
            builder
                .validator(move |text: &str| {
                    probe.runs.fetch_add(1, Ordering::SeqCst);
                    *probe.last.lock().unwrap() = text.to_string();
                    validate(text)
                })
                .build()
        }

        fn runs(&self) -> usize {
            self.runs.load(Ordering::SeqCst)
        }

        fn last(&self) -> String {
            self.last.lock().unwrap().clone()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_one_pass_against_last_text() {
        let probe = Probe::new();
        let controller = probe.install(ValidationController::builder().delay(DELAY));

        controller.on_content_change(r#"{"a""#);
        controller.on_content_change(r#"{"a": "#);
        controller.on_content_change(r#"{"a": 1}"#);
        assert!(controller.state().is_validating);

        tokio::time::sleep(DELAY * 2).await;
        settle().await;

        assert_eq!(probe.runs(), 1);
        assert_eq!(probe.last(), r#"{"a": 1}"#);
        assert!(controller.is_valid());
        assert!(!controller.state().is_validating);
    }

    #[tokio::test(start_paused = true)]
    async fn changes_outside_the_window_each_validate() {
        let probe = Probe::new();
        let controller = probe.install(ValidationController::builder().delay(DELAY));

        controller.on_content_change("1");
        tokio::time::sleep(DELAY * 2).await;
        settle().await;
        assert_eq!(probe.runs(), 1);

        controller.on_content_change("[1, 2]");
        tokio::time::sleep(DELAY * 2).await;
        settle().await;

        assert_eq!(probe.runs(), 2);
        assert_eq!(probe.last(), "[1, 2]");
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_text_publishes_diagnostics() {
        let controller = ValidationController::new(DELAY);

        controller.on_content_change(r#"{"a": 1,}"#);
        tokio::time::sleep(DELAY * 2).await;
        settle().await;

        let state = controller.state();
        assert!(!state.is_valid());
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors[0].severity, Severity::Error);
        assert_eq!(state.errors[0].line, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_buffer_updates_synchronously() {
        let probe = Probe::new();
        let controller = probe.install(ValidationController::builder().delay(DELAY));

        // Invalid state first, so the reset is observable.
        controller.on_content_change("{");
        tokio::time::sleep(DELAY * 2).await;
        settle().await;
        assert!(!controller.is_valid());

        controller.on_content_change("");
        // No time advanced: state is already clean.
        let state = controller.state();
        assert!(state.is_valid());
        assert!(state.errors.is_empty());
        assert!(!state.is_validating);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_buffer_cancels_pending_pass() {
        let probe = Probe::new();
        let controller = probe.install(ValidationController::builder().delay(DELAY));

        controller.on_content_change("{broken");
        controller.on_content_change("   ");
        tokio::time::sleep(DELAY * 2).await;
        settle().await;

        assert_eq!(probe.runs(), 0);
        assert!(controller.is_valid());
    }

    #[tokio::test(start_paused = true)]
    async fn observer_sees_one_notification_per_burst() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_observer = Arc::clone(&seen);
        let controller = ValidationController::builder()
            .delay(DELAY)
            .observer(Arc::new(FnObserver(move |_: &ValidationState| {
                seen_in_observer.fetch_add(1, Ordering::SeqCst);
            })))
            .build();

        controller.on_content_change("[1");
        controller.on_content_change("[1,");
        controller.on_content_change("[1, 2]");
        tokio::time::sleep(DELAY * 2).await;
        settle().await;

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn oversized_buffer_gets_advisory_warning() {
        let probe = Probe::new();
        let controller = probe.install(ValidationController::builder().delay(DELAY).max_len(8));

        controller.on_content_change(r#"{"a": [1, 2, 3, 4, 5]}"#);
        tokio::time::sleep(DELAY * 2).await;
        settle().await;

        // The parser never ran.
        assert_eq!(probe.runs(), 0);

        let state = controller.state();
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors[0].severity, Severity::Warning);
        // Advisory only: the buffer is not known to be invalid.
        assert!(state.is_valid());
    }

    #[test]
    fn empty_path_needs_no_runtime_clock() {
        // The synchronous empty-buffer path spawns no timer task.
        tokio_test::block_on(async {
            let controller = ValidationController::new(DELAY);
            controller.on_content_change("");
            assert!(controller.is_valid());
            assert!(controller.errors().is_empty());
        });
    }
}
