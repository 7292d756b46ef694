//! Configuration options for decoding parameter packages.
//!
//! Packages usually come from trusted configuration files, but the decoder can
//! also be pointed at arbitrary text. [`ParamOptions`] bounds how many bracket
//! levels are treated as structure. Deeper brackets stay in the value as text.
//!
//! ## Examples
//!
//! ```rust
//! use param_package::{ParamOptions, ParamPackage};
//!
//! let options = ParamOptions::new().with_max_depth(2);
//! let package = ParamPackage::from_str_with_options("a:[[[1]]],b:2", options);
//! assert_eq!(package.get_raw("a"), Some("[[[1]]]"));
//! assert_eq!(package.get("b", 0), 2);
//! ```

/// Default limit for bracket nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration options for decoding.
///
/// Nested packages decoded through [`ParamPackage::get`](crate::ParamPackage::get)
/// inherit the options of the package they were read from, with one level of
/// depth used up.
///
/// # Examples
///
/// ```rust
/// use param_package::ParamOptions;
///
/// let options = ParamOptions::new();
/// assert_eq!(options.max_depth, 64);
///
/// let options = ParamOptions::new().with_max_depth(8);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamOptions {
    pub max_depth: usize,
}

impl Default for ParamOptions {
    fn default() -> Self {
        ParamOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParamOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of nested bracket levels decoded as structure.
    ///
    /// With `0` every bracket is plain text and nested package reads fail.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
