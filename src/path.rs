//! Dotted section paths.
//!
//! A section name such as `server.tls` names the `tls` section nested inside
//! `server`. A dot that belongs to a name is written `\.`, so `a\.b` is one
//! segment. Segments keep their `\.` markers after splitting so they can be
//! joined back into a single header name without losing them.
//!
//! ```rust
//! use serde_ini::path;
//!
//! assert_eq!(path::split("server.tls"), vec!["server", "tls"]);
//! assert_eq!(path::split(r"example\.com.port"), vec![r"example\.com", "port"]);
//! assert_eq!(path::join(&["a", "b"]), r"a\.b");
//! ```

/// Splits `key` on every `.` that is not directly preceded by a backslash.
///
/// Always returns at least one segment; empty segments are kept.
///
/// # Examples
///
/// ```rust
/// use serde_ini::path::split;
///
/// assert_eq!(split("plain"), vec!["plain"]);
/// assert_eq!(split("a..b"), vec!["a", "", "b"]);
/// assert_eq!(split(r"a\.b.c"), vec![r"a\.b", "c"]);
/// ```
#[must_use]
pub fn split(key: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::with_capacity(key.len());
    let mut after_backslash = false;

    for ch in key.chars() {
        if ch == '.' && !after_backslash {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
        after_backslash = ch == '\\';
    }
    segments.push(current);
    segments
}

/// Joins segments with `\.`, producing one name whose dots are all literal.
///
/// The encoder uses this to turn a child key into the last component of a
/// section header: a key `a.b` becomes `a\.b` so that it decodes as a single
/// key rather than two nested sections.
#[must_use]
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\\.")
}

/// Replaces every `\.` with a bare `.`.
#[must_use]
pub(crate) fn unescape_dots(segment: &str) -> String {
    segment.replace("\\.", ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_dots() {
        assert_eq!(split("a.b.c"), vec!["a", "b", "c"]);
        assert_eq!(split(".lead"), vec!["", "lead"]);
        assert_eq!(split("trail."), vec!["trail", ""]);
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_split_keeps_escape_markers() {
        assert_eq!(split(r"a\.b"), vec![r"a\.b"]);
        assert_eq!(split(r"a\.b\.c.d"), vec![r"a\.b\.c", "d"]);
    }

    #[test]
    fn test_backslash_pair_still_escapes_the_dot() {
        // any backslash directly before a dot makes the dot literal
        assert_eq!(split(r"a\\.b"), vec![r"a\\.b"]);
    }

    #[test]
    fn test_other_backslashes_pass_through() {
        assert_eq!(split(r"c:\dir.x"), vec![r"c:\dir", "x"]);
    }

    #[test]
    fn test_join_then_split_is_one_segment() {
        let joined = join(&split("a.b.c"));
        assert_eq!(joined, r"a\.b\.c");
        assert_eq!(split(&joined), vec![joined.clone()]);
        assert_eq!(unescape_dots(&joined), "a.b.c");
    }

    #[test]
    fn test_join_single_and_empty() {
        assert_eq!(join(&["only"]), "only");
        assert_eq!(join::<&str>(&[]), "");
    }
}
