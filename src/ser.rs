//! Encoding side of the parameter package format.
//!
//! Most users should go through [`ParamPackage::serialize`](crate::ParamPackage::serialize)
//! or [`ParamPackage::set`](crate::ParamPackage::set). The functions here are the
//! building blocks those use.

use crate::spec::{
    EMPTY_PLACEHOLDER, ESCAPE_CHARACTER, ESCAPE_CHARACTER_ESCAPE, KEY_VALUE_SEPARATOR,
    KEY_VALUE_SEPARATOR_ESCAPE, LIST_CLOSE, LIST_OPEN, LIST_SEPARATOR, PARAM_SEPARATOR,
    PARAM_SEPARATOR_ESCAPE,
};
use std::fmt::Display;

/// Escapes `$`, `,` and `:` in scalar text.
///
/// # Examples
///
/// ```rust
/// use param_package::ser::escape;
///
/// assert_eq!(escape("x:y,z$w"), "x$0y$1z$2w");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ESCAPE_CHARACTER => output.push_str(ESCAPE_CHARACTER_ESCAPE),
            PARAM_SEPARATOR => output.push_str(PARAM_SEPARATOR_ESCAPE),
            KEY_VALUE_SEPARATOR => output.push_str(KEY_VALUE_SEPARATOR_ESCAPE),
            _ => output.push(ch),
        }
    }
    output
}

/// Returns `true` if `text` is a single balanced bracketed region, i.e. the
/// output of a list or nested package encoder.
///
/// # Examples
///
/// ```rust
/// use param_package::ser::is_bracketed_region;
///
/// assert!(is_bracketed_region("[a|b]"));
/// assert!(is_bracketed_region("[[x]|[y]]"));
/// assert!(!is_bracketed_region("[a]:[b]"));
/// assert!(!is_bracketed_region("plain"));
/// ```
#[must_use]
pub fn is_bracketed_region(text: &str) -> bool {
    if !text.starts_with(LIST_OPEN) || !text.ends_with(LIST_CLOSE) || text.len() < 2 {
        return false;
    }

    let mut depth = 0usize;
    for (index, ch) in text.char_indices() {
        match ch {
            LIST_OPEN => depth += 1,
            LIST_CLOSE => {
                depth = match depth.checked_sub(1) {
                    Some(d) => d,
                    None => return false,
                };
                // The opening bracket must only close at the very end
                if depth == 0 && index + ch.len_utf8() != text.len() {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Escapes a key or stored value for the outer level, leaving bracketed
/// payloads intact.
#[must_use]
pub fn escape_value(value: &str) -> String {
    if is_bracketed_region(value) {
        value.to_string()
    } else {
        escape(value)
    }
}

/// Writes `key:value` pairs joined by `,`, or the empty sentinel if there are none.
///
/// Pairs are written in iteration order; callers pass them sorted by key.
pub fn serialize_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut output = String::new();
    for (key, value) in pairs {
        if !output.is_empty() {
            output.push(PARAM_SEPARATOR);
        }
        output.push_str(&escape_value(key));
        output.push(KEY_VALUE_SEPARATOR);
        output.push_str(&escape_value(value));
    }

    if output.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        output
    }
}

/// Wraps items in brackets, separated by `|`.
///
/// # Examples
///
/// ```rust
/// use param_package::ser::join_list;
///
/// assert_eq!(join_list(&[1, 2, 3]), "[1|2|3]");
/// assert_eq!(join_list::<i32>(&[]), "[]");
/// ```
pub fn join_list<T: Display>(items: &[T]) -> String {
    let mut output = String::new();
    output.push(LIST_OPEN);
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            output.push(LIST_SEPARATOR);
        }
        output.push_str(&item.to_string());
    }
    output.push(LIST_CLOSE);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_order() {
        // `$` goes first so the `$` of `$0`/`$1` is never escaped again
        assert_eq!(escape("$0"), "$20");
        assert_eq!(escape(":,$"), "$0$1$2");
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_bracketed_region() {
        assert!(is_bracketed_region("[]"));
        assert!(is_bracketed_region("[a:1,b:[x|y]]"));
        assert!(!is_bracketed_region("["));
        assert!(!is_bracketed_region("]["));
        assert!(!is_bracketed_region("[a]]"));
        assert!(!is_bracketed_region("[[a]"));
        assert!(!is_bracketed_region("[a][b]"));
    }

    #[test]
    fn test_escape_value_skips_regions() {
        assert_eq!(escape_value("[a:1,b:2]"), "[a:1,b:2]");
        assert_eq!(escape_value("[a]:[b]"), "[a]$0[b]");
        assert_eq!(escape_value("1,5"), "1$15");
    }

    #[test]
    fn test_serialize_pairs() {
        let key_a = "a".to_string();
        let key_b = "b:c".to_string();
        let value_a = "1".to_string();
        let value_b = "[x|y]".to_string();
        let output = serialize_pairs(vec![(&key_a, &value_a), (&key_b, &value_b)]);
        assert_eq!(output, "a:1,b$0c:[x|y]");

        assert_eq!(serialize_pairs(Vec::new()), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_join_list_floats() {
        assert_eq!(join_list(&[0.5f32, -1.25]), "[0.5|-1.25]");
    }
}
