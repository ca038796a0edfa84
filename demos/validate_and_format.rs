//! Validate a buffer, then format and minify it.
//!
//! Run with: `cargo run --example validate_and_format`

use json_edit_core::{format, minify, validate, FormatOptions, IndentSize, IndentStyle};

fn main() {
    let broken = r#"{"name": "demo", "items": [1, 2,]}"#;
    let result = validate(broken);
    println!("valid: {}", result.is_valid());
    for diag in &result.errors {
        println!("  {}:{}: {}", diag.line, diag.column, diag.message);
    }

    let good = r#"{"name":"demo","items":[1,2],"nested":{"ok":true}}"#;
    assert!(validate(good).is_valid());

    let two_spaces = format(good, &FormatOptions::default()).unwrap();
    println!("--- 2 spaces ---\n{two_spaces}");

    let tabs = format(
        good,
        &FormatOptions {
            indent_size: IndentSize::Four,
            indent_style: IndentStyle::Tabs,
        },
    )
    .unwrap();
    println!("--- tabs ---\n{tabs}");

    println!("--- minified ---\n{}", minify(&two_spaces).unwrap());
}
