//! Parameter package text format.
//!
//! This module documents the flat text format produced by
//! [`ParamPackage::serialize`](crate::ParamPackage::serialize) and defines the
//! delimiter constants shared by the encoder and decoder.
//!
//! # Overview
//!
//! A package is a set of string keys mapped to string values, written on a
//! single line. Values may themselves encode lists or whole packages, so a
//! structured configuration (for example an input binding with a list of
//! modifier buttons) fits into one string that any settings backend can store.
//!
//! # Grammar
//!
//! ```text
//! package        := pair (',' pair)*
//! pair           := key ':' value
//! value          := scalar | '[' list_or_nested ']'
//! list_or_nested := item ('|' item)*
//! ```
//!
//! | Delimiter | Meaning |
//! |-----------|---------|
//! | `:` | key/value separator |
//! | `,` | pair separator |
//! | `\|` | list item separator |
//! | `[` `]` | list or nested package payload |
//! | `$` | escape prefix |
//!
//! Pairs are written in lexicographic key order with no trailing separator:
//!
//! ```text
//! button:3,engine:gcpad,port:0
//! ```
//!
//! # Escaping
//!
//! Keys and scalar values escape the three characters that would otherwise be
//! read as structure:
//!
//! | Literal | Escaped |
//! |---------|---------|
//! | `:` | `$0` |
//! | `,` | `$1` |
//! | `$` | `$2` |
//!
//! Encoding replaces `$` first, then `,`, then `:`, so that inserted escape
//! sequences are never escaped again. Unescaping replaces `$0`, then `$1`,
//! then `$2`.
//!
//! Bracketed values are written verbatim. Their content was produced by a
//! nested list or package encoder and is protected from the outer delimiter
//! scan by placeholders (see below), so escaping it again would corrupt it.
//!
//! A decoded key or value has its placeholders restored *before* it is
//! unescaped, and a part that is exactly one bracketed region is not unescaped
//! at all. A scalar such as `[a:b]c` is escaped as a whole when written, so
//! this order reads it back unchanged. Hand-written text with escapes inside
//! brackets is read differently from the older unescape-then-restore order:
//!
//! ```text
//! a:[x$0y]z   ->  a = "[x:y]z"
//! b:[x$0y]    ->  b = "[x$0y]"
//! ```
//!
//! # Lists
//!
//! ```text
//! modifiers:[1|2|4]
//! ```
//!
//! List items are not escaped and must not contain `|`. An empty list is `[]`.
//!
//! # Nested Packages
//!
//! A nested package is its own serialized form wrapped in brackets; a list of
//! packages joins several of them with `|`:
//!
//! ```text
//! axis:[axis:0,engine:sdl],buttons:[button:1,engine:sdl|button:2,engine:sdl]
//! ```
//!
//! A bracketed value is classified by its outer level only:
//!
//! - a top-level `|` and no top-level `,` means a list of scalars
//! - a top-level `,` means a nested package (or a list of packages)
//! - neither means a single-element list
//!
//! A package with exactly one key therefore looks like a single-element list
//! and cannot be read back as a nested package. This is a known limitation of
//! the format.
//!
//! # Placeholders
//!
//! Before splitting on `,` or `:`, every balanced `[...]` region is replaced by
//! a `##N` token, innermost regions first, and its original text recorded at
//! index `N` of a lookup table. After splitting, each token is replaced by the
//! recorded text in one pass. The table lives only for one decode call.
//!
//! In the masked text a literal `#` is written as `#!`, and a token directly
//! followed by a digit or `!` is closed with `!`. Text that only looks like a
//! token therefore comes back unchanged, and restoring never produces more
//! text than was masked.
//!
//! # Nesting Limit
//!
//! Only the first [`ParamOptions::max_depth`](crate::ParamOptions) bracket
//! levels are masked. A bracket beyond that, or one without a partner, is plain
//! text. Every value still decodes to the text it was written as, including a
//! scalar made of nothing but `[`. Each nested package read spends one level,
//! and a read with no level left fails with
//! [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded).
//!
//! # Empty Package
//!
//! An empty package serializes to the sentinel `[empty]` rather than the empty
//! string, since several settings frontends treat an empty string as "unset".

/// Separates a key from its value.
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Separates `key:value` pairs.
pub const PARAM_SEPARATOR: char = ',';

/// Separates list items and packages inside a bracketed value.
pub const LIST_SEPARATOR: char = '|';

/// Opens a list or nested package.
pub const LIST_OPEN: char = '[';

/// Closes a list or nested package.
pub const LIST_CLOSE: char = ']';

/// Prefix of every escape sequence.
pub const ESCAPE_CHARACTER: char = '$';

pub const KEY_VALUE_SEPARATOR_ESCAPE: &str = "$0";
pub const PARAM_SEPARATOR_ESCAPE: &str = "$1";
pub const ESCAPE_CHARACTER_ESCAPE: &str = "$2";

/// Serialized form of an empty package.
pub const EMPTY_PLACEHOLDER: &str = "[empty]";

/// Prefix of a placeholder token.
pub const PLACEHOLDER_PREFIX: &str = "##";

pub const PLACEHOLDER_HASH: char = '#';

/// Masked form of a literal `#`.
pub const PLACEHOLDER_HASH_ESCAPE: &str = "#!";

/// Closes a placeholder token followed by a digit or `!`.
pub const PLACEHOLDER_TERMINATOR: char = '!';
