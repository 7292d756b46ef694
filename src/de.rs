//! Decoding side of the parameter package format.
//!
//! Decoding never fails as a whole. Malformed pairs are logged and skipped,
//! and the remaining pairs are kept. Brackets nested deeper than
//! [`ParamOptions::max_depth`] lose their structure and are read as plain text.
//!
//! ## Placeholders
//!
//! [`Placeholders`] hides bracketed regions from the delimiter scan:
//!
//! ```rust
//! use param_package::de::Placeholders;
//!
//! let mut lookup = Placeholders::new();
//! let masked = lookup.mask("a:[1|2],b:[x:[y]]", 64);
//! assert_eq!(masked, "a:##0,b:##2");
//! assert_eq!(lookup.restore("##2"), "[x:[y]]");
//! ```

use crate::options::ParamOptions;
use crate::ser::is_bracketed_region;
use crate::spec::{
    EMPTY_PLACEHOLDER, ESCAPE_CHARACTER, ESCAPE_CHARACTER_ESCAPE, KEY_VALUE_SEPARATOR,
    KEY_VALUE_SEPARATOR_ESCAPE, LIST_CLOSE, LIST_OPEN, LIST_SEPARATOR, PARAM_SEPARATOR,
    PARAM_SEPARATOR_ESCAPE, PLACEHOLDER_HASH, PLACEHOLDER_HASH_ESCAPE, PLACEHOLDER_PREFIX,
    PLACEHOLDER_TERMINATOR,
};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Reverses [`escape`](crate::ser::escape).
///
/// # Examples
///
/// ```rust
/// use param_package::de::unescape;
///
/// assert_eq!(unescape("x$0y$1z$2w"), "x:y,z$w");
/// ```
#[must_use]
pub fn unescape(text: &str) -> String {
    text.replace(KEY_VALUE_SEPARATOR_ESCAPE, &KEY_VALUE_SEPARATOR.to_string())
        .replace(PARAM_SEPARATOR_ESCAPE, &PARAM_SEPARATOR.to_string())
        .replace(ESCAPE_CHARACTER_ESCAPE, &ESCAPE_CHARACTER.to_string())
}

/// Lookup table of bracketed regions replaced by `##N` tokens.
///
/// A table is created per decode call and dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placeholders {
    lookup: Vec<String>,
}

/// One bracket level of the masking scan.
struct Frame {
    masked: String,
    // byte offset of the opening bracket in the scanned text
    start: usize,
    after_token: bool,
}

impl Frame {
    fn new(start: usize) -> Self {
        Frame {
            masked: String::new(),
            start,
            after_token: false,
        }
    }

    fn push_literal(&mut self, ch: char) {
        // `##1` followed by a literal `0` must not read as `##10`
        if self.after_token && (ch.is_ascii_digit() || ch == PLACEHOLDER_TERMINATOR) {
            self.masked.push(PLACEHOLDER_TERMINATOR);
        }
        if ch == PLACEHOLDER_HASH {
            self.masked.push_str(PLACEHOLDER_HASH_ESCAPE);
        } else {
            self.masked.push(ch);
        }
        self.after_token = false;
    }

    fn push_token(&mut self, index: usize) {
        self.masked.push_str(PLACEHOLDER_PREFIX);
        self.masked.push_str(&index.to_string());
        self.after_token = true;
    }
}

impl Placeholders {
    /// Creates an empty lookup table.
    #[must_use]
    pub fn new() -> Self {
        Placeholders { lookup: Vec::new() }
    }

    /// Number of recorded regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Returns the original text of region `index`, brackets included.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lookup.get(index).map(String::as_str)
    }

    /// Replaces every balanced `[...]` region in `text` with a `##N` token.
    ///
    /// Regions are recorded innermost first, in the order their closing
    /// brackets appear. Literal `#` characters are written as `#!` so that
    /// text which merely looks like a token is never expanded.
    ///
    /// Unmatched brackets, and brackets nested deeper than `max_depth`, are
    /// kept as literal text.
    #[must_use]
    pub fn mask(&mut self, text: &str, max_depth: usize) -> String {
        // frames[0] is the unbracketed text, every further frame an open region
        let mut frames = vec![Frame::new(0)];

        for (offset, ch) in text.char_indices() {
            match ch {
                LIST_OPEN if frames.len() <= max_depth => {
                    let mut frame = Frame::new(offset);
                    frame.masked.push(LIST_OPEN);
                    frames.push(frame);
                }
                LIST_CLOSE if frames.len() > 1 => {
                    let Some(frame) = frames.pop() else { break };
                    let end = offset + ch.len_utf8();
                    let index = self.lookup.len();
                    self.lookup.push(text[frame.start..end].to_string());
                    if let Some(parent) = frames.last_mut() {
                        parent.push_token(index);
                    }
                }
                _ => {
                    if let Some(top) = frames.last_mut() {
                        top.push_literal(ch);
                    }
                }
            }
        }

        // Fold unclosed regions back into their parents as plain text
        while frames.len() > 1 {
            let Some(unclosed) = frames.pop() else { break };
            if let Some(parent) = frames.last_mut() {
                parent.masked.push_str(&unclosed.masked);
                parent.after_token = unclosed.after_token;
            }
        }

        frames.pop().map(|frame| frame.masked).unwrap_or_default()
    }

    /// Expands the `##N` tokens in masked `text` back to the regions they
    /// stand for, in a single pass.
    ///
    /// Region text is copied as recorded and never scanned again, so the
    /// output of restoring a masked string is exactly the text that was
    /// masked. Tokens whose index is not in the table are left as they are.
    #[must_use]
    pub fn restore(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(position) = rest.find(PLACEHOLDER_HASH) {
            output.push_str(&rest[..position]);
            rest = &rest[position..];

            if let Some(tail) = rest.strip_prefix(PLACEHOLDER_HASH_ESCAPE) {
                output.push(PLACEHOLDER_HASH);
                rest = tail;
                continue;
            }

            if let Some(after) = rest.strip_prefix(PLACEHOLDER_PREFIX) {
                let digits = after.bytes().take_while(u8::is_ascii_digit).count();
                let region = after[..digits]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.lookup.get(index));
                if let Some(region) = region {
                    output.push_str(region);
                    let tail = &after[digits..];
                    rest = tail.strip_prefix(PLACEHOLDER_TERMINATOR).unwrap_or(tail);
                    continue;
                }
            }

            output.push(PLACEHOLDER_HASH);
            rest = &rest[PLACEHOLDER_HASH.len_utf8()..];
        }

        output.push_str(rest);
        output
    }
}

/// Splits serialized package text into its key/value map.
///
/// Pairs that do not split into exactly two parts are logged and skipped.
/// For a duplicated key the last pair wins.
///
/// # Examples
///
/// ```rust
/// use param_package::de::parse_pairs;
/// use param_package::ParamOptions;
///
/// let map = parse_pairs("a:1,bad,c:3", &ParamOptions::default());
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["c"], "3");
/// ```
#[must_use]
pub fn parse_pairs(text: &str, options: &ParamOptions) -> BTreeMap<String, String> {
    let mut data = BTreeMap::new();
    if text.is_empty() || text == EMPTY_PLACEHOLDER {
        return data;
    }

    let mut lookup = Placeholders::new();
    let masked = lookup.mask(text, options.max_depth);

    for pair in masked.split(PARAM_SEPARATOR) {
        let parts: Vec<&str> = pair.split(KEY_VALUE_SEPARATOR).collect();
        if parts.len() != 2 {
            let err = Error::InvalidPair(lookup.restore(pair));
            log::error!("{}", err);
            continue;
        }

        let key = decode_part(parts[0], &lookup);
        let value = decode_part(parts[1], &lookup);
        data.insert(key, value);
    }

    data
}

/// Restores one masked key or value and unescapes it unless it was written
/// verbatim as a bracketed region.
fn decode_part(part: &str, lookup: &Placeholders) -> String {
    let restored = lookup.restore(part);
    if is_bracketed_region(&restored) {
        restored
    } else {
        unescape(&restored)
    }
}

/// Returns the text between the outer brackets of a list or nested package.
///
/// # Errors
///
/// Returns [`Error::NotBracketed`] if `value` does not start with `[` and end with `]`.
pub fn strip_brackets(value: &str) -> Result<&str> {
    if value.len() >= 2 && value.starts_with(LIST_OPEN) && value.ends_with(LIST_CLOSE) {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(Error::NotBracketed(value.to_string()))
    }
}

/// Decodes a bracketed list into its raw items.
///
/// `[]` is an empty list; otherwise empty items are kept.
///
/// # Errors
///
/// Returns [`Error::NotBracketed`] if `value` is not a bracketed list.
///
/// # Examples
///
/// ```rust
/// use param_package::de::decode_list;
///
/// assert_eq!(decode_list("[a||c]").unwrap(), vec!["a", "", "c"]);
/// assert!(decode_list("[]").unwrap().is_empty());
/// assert!(decode_list("a|b").is_err());
/// ```
pub fn decode_list(value: &str) -> Result<Vec<String>> {
    let inner = strip_brackets(value)?;
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    Ok(inner.split(LIST_SEPARATOR).map(str::to_string).collect())
}
