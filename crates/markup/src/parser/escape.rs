//! Escape handling for literal text.
//!
//! Literal brackets are written as the three-character sequences `\[\` and
//! `\]\`. A backslash outside those exact triples is ordinary text.

use std::borrow::Cow;

const ESCAPED_OPEN: &str = r"\[\";
const ESCAPED_CLOSE: &str = r"\]\";

/// Resolve the bracket escapes in a literal span.
///
/// A single greedy left-to-right pass: the leftmost `\X\` (where `X` is a
/// bracket) consumes all three characters before scanning resumes, so
/// overlapping candidates never share a backslash.
///
/// Returns the input unchanged, without copying, when it holds no escapes.
///
/// # Examples
///
/// ```
/// use markup::parser::unescape;
///
/// assert_eq!(unescape(r"\[\red\]\"), "[red]");
/// assert_eq!(unescape(r"C:\temp"), r"C:\temp");
/// ```
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(ESCAPED_OPEN) && !raw.contains(ESCAPED_CLOSE) {
        return Cow::Borrowed(raw);
    }

    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut copied = 0;
    let mut i = 0;

    while i + 2 < bytes.len() {
        if bytes[i] == b'\\' && matches!(bytes[i + 1], b'[' | b']') && bytes[i + 2] == b'\\' {
            out.push_str(&raw[copied..i]);
            out.push(bytes[i + 1] as char);
            i += 3;
            copied = i;
        } else {
            i += 1;
        }
    }

    out.push_str(&raw[copied..]);
    Cow::Owned(out)
}

/// Escape every bracket in `text` so it reads back as literal text.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['[', ']']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match c {
            '[' => out.push_str(ESCAPED_OPEN),
            ']' => out.push_str(ESCAPED_CLOSE),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
