//! Debounced revalidation, the way an editor host would wire it.
//!
//! Simulates a typing burst: every keystroke reaches the controller, but
//! only the final buffer is validated once the idle window elapses.
//!
//! Run with: `cargo run --example live_validation`

use std::sync::Arc;
use std::time::Duration;

use json_edit_core::controller::{ValidationController, ValidationState};
use json_edit_core::events::FnObserver;

#[tokio::main]
async fn main() {
    let controller = ValidationController::builder()
        .delay(Duration::from_millis(200))
        .observer(Arc::new(FnObserver(|state: &ValidationState| {
            if state.is_valid() {
                println!("[sink] buffer is valid");
            } else {
                for diag in &state.errors {
                    println!("[sink] {}:{}: {}", diag.line, diag.column, diag.message);
                }
            }
        })))
        .build();

    // A typing burst: intermediate states are never validated.
    for keystroke in [r#"{"#, r#"{"a""#, r#"{"a": 1"#, r#"{"a": 1}"#] {
        controller.on_content_change(keystroke);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    tokio::time::sleep(Duration::from_millis(300)).await;
    println!("final state valid: {}", controller.is_valid());

    // A stray edit breaks the buffer; the sink hears about it once.
    controller.on_content_change(r#"{"a": 1,}"#);
    tokio::time::sleep(Duration::from_millis(300)).await;
    println!("after bad edit valid: {}", controller.is_valid());
}
