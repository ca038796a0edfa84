//! Repair common hand-editing mistakes, then re-validate.
//!
//! Run with: `cargo run --example repair`

use json_edit_core::{try_fix, validate};

fn main() {
    let inputs = [
        r#"{name: "test"}"#,
        r#"{"a": 1, "b": 2,}"#,
        "{'key': 'value'}",
        "{name: 'x', tags: ['a', 'b',],}",
        "not json at all",
    ];

    for input in inputs {
        let fixed = try_fix(input);
        // Repair success is only knowable by re-validating.
        let ok = validate(&fixed).is_valid();
        if fixed == input {
            println!("{input:40} -> unchanged (valid: {ok})");
        } else {
            println!("{input:40} -> {fixed} (valid: {ok})");
        }
    }
}
