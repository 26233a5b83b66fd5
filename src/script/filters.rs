//! MiniJinja filter registration for script generation.

use minijinja::{Environment, Value};

/// Registers the script-generation filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Filter to render a value as a single-quoted JavaScript string literal.
    // Usage: {{ key | js_str }} outputs 'theme'
    env.add_filter("js_str", |value: Value| -> String {
        js_string_literal(&value.to_string())
    });
}

/// Escapes a string into a single-quoted JavaScript string literal.
///
/// Escapes backslash, quotes, control characters, `<` (so the literal can
/// never close an enclosing `<script>` element), and the U+2028/U+2029 line
/// separators that are line terminators in JavaScript source.
pub(crate) fn js_string_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('\'');
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003C"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
