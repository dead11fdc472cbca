//! POSIX shell quoting for environment values
//!
//! INVARIANT: for every input `s`, a POSIX shell evaluating `NAME=<quote(s)>`
//! assigns exactly `s` to `NAME`.

use std::borrow::Cow;

/// Characters that never need quoting in the value part of an assignment.
///
/// Excludes `~`: assignments tilde-expand after `=` and `:`.
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ',' | '.' | '_' | '+' | ':' | '@' | '%' | '/' | '=' | '-')
}

/// Quote `value` so a POSIX shell reproduces it verbatim.
///
/// - empty string becomes `''`
/// - values made only of safe characters are returned unchanged
/// - anything else is wrapped in single quotes, with each embedded `'`
///   written as `'\''` (close, escaped quote, reopen)
///
/// Single quotes suppress every expansion, so `$`, backticks, double quotes,
/// backslashes and newlines all survive unchanged.
pub fn quote(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed("''");
    }

    if value.chars().all(is_safe) {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

/// Join words with single spaces, quoting each one.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| quote(w.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
