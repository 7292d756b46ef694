//! # param_package
//!
//! A string-based key-value container that serializes to a single line of text.
//!
//! ## What is a ParamPackage?
//!
//! A [`ParamPackage`] stores configuration values (input bindings, device
//! parameters and the like) as string keys mapped to string values, and encodes
//! the whole set as one flat string that any settings backend can persist:
//!
//! ```text
//! code:65,engine:keyboard,modifiers:[1|2]
//! ```
//!
//! Values can be scalars, `|`-separated lists, whole nested packages, or lists
//! of nested packages. See [`spec`] for the format.
//!
//! ## Key Features
//!
//! - **Flat text**: one line, no quoting, three-character escape scheme
//! - **Nesting**: lists and packages embed inside a single value
//! - **Typed access**: [`ParamPackage::get`] and [`ParamPackage::set`] work with
//!   strings, integers, floats, lists and packages
//! - **Total reads**: a missing key or malformed value is logged through the
//!   [`log`] facade and the caller's default is returned
//!
//! ## Quick Start
//!
//! ```rust
//! use param_package::{params, ParamPackage};
//!
//! let mut binding = params! {
//!     "engine": "sdl",
//!     "port": 0,
//! };
//! binding.set("deadzone", 0.15f32);
//!
//! let text = binding.serialize();
//! assert_eq!(text, "deadzone:0.15,engine:sdl,port:0");
//!
//! let decoded: ParamPackage = text.parse().unwrap();
//! assert_eq!(decoded.get("deadzone", 0.0f32), 0.15);
//! assert_eq!(decoded.get("engine", String::new()), "sdl");
//! ```
//!
//! ### Nested Packages
//!
//! ```rust
//! use param_package::{params, ParamPackage};
//!
//! let left = params! { "axis": 0, "engine": "sdl" };
//! let right = params! { "axis": 1, "engine": "sdl" };
//!
//! let mut stick = ParamPackage::new();
//! stick.set("axes", vec![left.clone(), right.clone()]);
//!
//! let decoded = param_package::from_str(&stick.serialize());
//! assert_eq!(decoded.get("axes", Vec::<ParamPackage>::new()), vec![left, right]);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API
//! - Bracket nesting is bounded by [`ParamOptions::max_depth`]; deeper brackets
//!   are read as plain text
//! - Decoding does not recurse, and its output never exceeds the input length

pub mod de;
pub mod error;
pub mod macros;
pub mod options;
pub mod package;
pub mod ser;
pub mod spec;
pub mod value;

pub use error::{Error, Result};
pub use options::ParamOptions;
pub use package::ParamPackage;
pub use value::{FromParam, IntoParam, ListItem};

/// Decodes a serialized package.
///
/// Decoding never fails; malformed pairs are logged and skipped.
///
/// # Examples
///
/// ```rust
/// let package = param_package::from_str("a:1,bad,c:3");
/// assert_eq!(package.len(), 2);
/// assert_eq!(package.get("c", 0), 3);
/// ```
#[must_use]
pub fn from_str(serialized: &str) -> ParamPackage {
    ParamPackage::from_str_with_options(serialized, ParamOptions::default())
}

/// Decodes a serialized package with custom options.
#[must_use]
pub fn from_str_with_options(serialized: &str, options: ParamOptions) -> ParamPackage {
    ParamPackage::from_str_with_options(serialized, options)
}

/// Encodes a package as a single line.
///
/// # Examples
///
/// ```rust
/// use param_package::params;
///
/// let package = params! { "name": "a,b" };
/// assert_eq!(param_package::to_string(&package), "name:a$1b");
/// ```
#[must_use]
pub fn to_string(package: &ParamPackage) -> String {
    package.serialize()
}
