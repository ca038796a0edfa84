//! Heuristic repair for common hand-edited JSON mistakes.
//!
//! [`try_fix`] applies a bounded, ordered set of textual substitutions to
//! text that fails strict parsing and keeps the first variant that
//! validates. No regex and no tokenizer: every fix is a manual char scan
//! that tracks in-string/escape state, so quoted content is never touched.
//!
//! This is deliberately incomplete. The contract is "try obvious fixes,
//! otherwise leave the input untouched": the function never returns a
//! changed string that still fails to parse.

use crate::validate::validate;

/// Attempt to fix common JSON syntax mistakes.
///
/// Candidates are built from the *original* text and validated in order:
///
/// 1. quote bare object keys (`{name: 1}` → `{"name": 1}`)
/// 2. remove trailing commas before `}` or `]`
/// 3. rewrite single-quoted strings as double-quoted
/// 4. all of the above combined
///
/// The first candidate that validates is returned. Input that already
/// validates, or that no candidate can fix, comes back unchanged, so
/// callers re-validate the result to learn whether repair succeeded.
///
/// # Examples
///
/// ```
/// use json_edit_core::repair::try_fix;
/// use json_edit_core::validate;
///
/// let fixed = try_fix(r#"{name: "test"}"#);
/// assert_eq!(fixed, r#"{"name": "test"}"#);
/// assert!(validate(&fixed).is_valid());
///
/// // Nothing obvious to fix: input comes back untouched.
/// assert_eq!(try_fix("not json at all"), "not json at all");
/// ```
pub fn try_fix(text: &str) -> String {
    if validate(text).is_valid() {
        return text.to_string();
    }

    let passes: [fn(&str) -> String; 3] = [
        quote_bare_keys,
        strip_trailing_commas,
        rewrite_single_quotes,
    ];

    for pass in passes {
        let candidate = pass(text);
        if candidate != text && validate(&candidate).is_valid() {
            return candidate;
        }
    }

    // Individual fixes were not enough; chain all of them.
    let combined = rewrite_single_quotes(&strip_trailing_commas(&quote_bare_keys(text)));
    if combined != text && validate(&combined).is_valid() {
        return combined;
    }

    text.to_string()
}

/// Last non-whitespace char strictly before `i`. Callers only invoke this
/// outside string context.
fn prev_significant(chars: &[char], i: usize) -> Option<char> {
    chars[..i].iter().rev().find(|c| !c.is_whitespace()).copied()
}

/// First non-whitespace char strictly after `i`.
fn next_significant(chars: &[char], i: usize) -> Option<char> {
    chars[i + 1..].iter().find(|c| !c.is_whitespace()).copied()
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Double-quote bare identifiers in object-key position.
///
/// A bare key is an identifier that directly follows `{` or `,` (outside
/// any string) and is followed, after optional whitespace, by a colon.
/// Already-quoted keys and colons inside string values are untouched.
fn quote_bare_keys(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut in_string = false;
    let mut escaped = false;
    let mut prev_sig = None::<char>;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            prev_sig = Some(c);
            i += 1;
            continue;
        }

        if is_ident_start(c) && matches!(prev_sig, Some('{') | Some(',')) {
            let start = i;
            let mut end = i + 1;
            while end < chars.len() && is_ident_continue(chars[end]) {
                end += 1;
            }
            if next_significant(&chars, end - 1) == Some(':') {
                out.push('"');
                out.extend(&chars[start..end]);
                out.push('"');
                prev_sig = Some('"');
            } else {
                out.extend(&chars[start..end]);
                prev_sig = Some(chars[end - 1]);
            }
            i = end;
            continue;
        }

        out.push(c);
        if !c.is_whitespace() {
            prev_sig = Some(c);
        }
        i += 1;
    }

    out
}

/// Drop commas whose next significant char closes the surrounding
/// container: `{"a": 1, }` → `{"a": 1 }`, `[1, 2,]` → `[1, 2]`.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }

        if c == ',' && matches!(next_significant(&chars, i), Some('}') | Some(']')) {
            continue;
        }

        out.push(c);
    }

    out
}

/// Rewrite single-quoted strings as double-quoted, escaping embedded `"`
/// and unescaping `\'`.
///
/// Only applies where the delimiters are unambiguous: the opening quote
/// must sit where a JSON string can start (after `{`, `[`, `:`, `,`, or at
/// the start of input) and the closing quote where one can end. Apostrophes
/// inside double-quoted strings are never touched; an apostrophe that fails
/// the boundary checks is passed through untouched.
fn rewrite_single_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_double = false;
    let mut escaped = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_double {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_double = false;
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_double = true;
            out.push(c);
            i += 1;
            continue;
        }

        if c == '\'' && opens_at(&chars, i) {
            if let Some(close) = closing_single_quote(&chars, i + 1) {
                if closes_at(&chars, close) {
                    out.push('"');
                    let mut k = i + 1;
                    while k < close {
                        match chars[k] {
                            '"' => out.push_str("\\\""),
                            '\\' if k + 1 < close && chars[k + 1] == '\'' => {
                                out.push('\'');
                                k += 1;
                            }
                            other => out.push(other),
                        }
                        k += 1;
                    }
                    out.push('"');
                    i = close + 1;
                    continue;
                }
            }
        }

        out.push(c);
        i += 1;
    }

    out
}

/// A single quote at `i` can open a string when what precedes it is a
/// structural char (or nothing).
fn opens_at(chars: &[char], i: usize) -> bool {
    match prev_significant(chars, i) {
        None => true,
        Some(c) => matches!(c, '{' | '[' | ':' | ','),
    }
}

/// A single quote at `i` can close a string when what follows it is a
/// structural char (or nothing).
fn closes_at(chars: &[char], i: usize) -> bool {
    match next_significant(chars, i) {
        None => true,
        Some(c) => matches!(c, '}' | ']' | ':' | ','),
    }
}

/// Index of the closing `'` starting the scan at `from`, skipping `\'`.
fn closing_single_quote(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '\'' => return Some(i),
            _ => i += 1,
        }
    }
    None
}
