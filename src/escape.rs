//! Escaping of keys, values and section names.
//!
//! A token written to an INI line must survive the trip back through the
//! decoder unchanged. Two strategies cover every scalar:
//!
//! - **JSON quoting** for anything the line grammar would misread: non-strings,
//!   strings containing `=`, CR or LF, strings starting with `[`, strings that
//!   already look quoted, and strings with surrounding whitespace
//! - **Comment escaping** for everything else: `;` and `#` become `\;` and `\#`
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini::{escape_str, unescape, Value};
//!
//! assert_eq!(escape_str("plain"), "plain");
//! assert_eq!(escape_str("a;b#c"), r"a\;b\#c");
//! assert_eq!(escape_str("k=v"), r#""k=v""#);
//!
//! assert_eq!(unescape(r"a\;b\#c"), Value::from("a;b#c"));
//! assert_eq!(unescape("value ;trailing comment"), Value::from("value "));
//! ```

use crate::{Error, Result, Value};

/// Returns `true` if `val` starts and ends with the same quote character,
/// either `"` or `'`.
///
/// A lone quote character counts as quoted.
#[inline]
#[must_use]
pub fn is_quoted(val: &str) -> bool {
    (val.starts_with('"') && val.ends_with('"')) || (val.starts_with('\'') && val.ends_with('\''))
}

#[inline]
fn needs_quotes(s: &str) -> bool {
    s.contains(['=', '\r', '\n'])
        || s.starts_with('[')
        || (s.len() > 1 && is_quoted(s))
        || s != s.trim()
}

/// Writes `s` as a JSON string literal, escaping the same characters
/// `JSON.stringify` does.
fn write_json_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Escapes a string so it can be used as a key, value or section name.
///
/// # Examples
///
/// ```rust
/// use serde_ini::escape_str;
///
/// assert_eq!(escape_str("number# is; 12345"), r"number\# is\; 12345");
/// assert_eq!(escape_str(" padded "), r#"" padded ""#);
/// assert_eq!(escape_str("[not a header]"), r#""[not a header]""#);
/// ```
#[must_use]
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    if needs_quotes(s) {
        write_json_string(&mut out, s);
    } else {
        for ch in s.chars() {
            if ch == ';' || ch == '#' {
                out.push('\\');
            }
            out.push(ch);
        }
    }
    out
}

/// Escapes a scalar value for the right-hand side of `key=value`.
///
/// Non-string scalars are written as JSON literals (`true`, `null`, `42`).
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for arrays and sections, which have no
/// single-token form.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{escape, Value};
///
/// assert_eq!(escape(&Value::Bool(false)).unwrap(), "false");
/// assert_eq!(escape(&Value::Null).unwrap(), "null");
/// assert_eq!(escape(&Value::from(7)).unwrap(), "7");
/// assert!(escape(&Value::from(vec!["a"])).is_err());
/// ```
pub fn escape(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_json()),
        Value::String(s) => Ok(escape_str(s)),
        Value::Array(_) | Value::Section(_) => Err(Error::invalid_value(&format!(
            "cannot write {} as a single INI token",
            value.type_name()
        ))),
    }
}

/// Reads one raw token (a key, a value or a section name) back into a value.
///
/// Surrounding whitespace is trimmed first. A quoted token is parsed as a JSON
/// literal, after stripping one layer of single quotes if present; when that
/// parse fails the token is kept as text. An unquoted token ends at the first
/// unescaped `;` or `#`, and `\\`, `\;` and `\#` resolve to the escaped
/// character. Any other backslash is kept.
///
/// The result is a string unless a quoted JSON literal said otherwise. Turning
/// bare `true`, `false` and `null` into their typed values is left to the
/// decoder.
///
/// # Examples
///
/// ```rust
/// use serde_ini::{unescape, Number, Value};
///
/// assert_eq!(unescape(r#"  "a=b"  "#), Value::from("a=b"));
/// assert_eq!(unescape("'42'"), Value::Number(Number::Integer(42)));
/// assert_eq!(unescape(r#""broken"#), Value::from(r#""broken"#));
/// assert_eq!(unescape(r"C:\temp"), Value::from(r"C:\temp"));
/// assert_eq!(unescape("true"), Value::from("true"));
/// ```
#[must_use]
pub fn unescape(raw: &str) -> Value {
    let val = raw.trim();

    if is_quoted(val) {
        let literal = if val.starts_with('\'') {
            if val.len() >= 2 {
                &val[1..val.len() - 1]
            } else {
                ""
            }
        } else {
            val
        };
        return match serde_json::from_str::<serde_json::Value>(literal) {
            Ok(parsed) => Value::from(parsed),
            Err(_) => Value::String(literal.to_string()),
        };
    }

    let mut out = String::with_capacity(val.len());
    let mut escaped = false;
    for ch in val.chars() {
        if escaped {
            if !matches!(ch, '\\' | ';' | '#') {
                out.push('\\');
            }
            out.push(ch);
            escaped = false;
        } else if ch == ';' || ch == '#' {
            break;
        } else if ch == '\\' {
            escaped = true;
        } else {
            out.push(ch);
        }
    }
    if escaped {
        out.push('\\');
    }
    Value::String(out)
}
