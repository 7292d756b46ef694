//! Error types for decoding stored parameter values.
//!
//! These errors never reach callers of [`ParamPackage::get`](crate::ParamPackage::get):
//! the container logs them and falls back to the caller's default. They are
//! public so that custom [`FromParam`](crate::FromParam) implementations can
//! report failures through the same channel.
//!
//! ## Error Categories
//!
//! - **Malformed pairs**: a `key:value` pair without exactly one separator
//! - **Type mismatches**: numeric parse failures, scalars where a list was expected
//! - **Structural mismatches**: lists where a nested package was expected, or vice versa
//! - **Nesting limit**: a nested package read after [`ParamOptions::max_depth`](crate::ParamOptions) is used up
//!
//! ## Examples
//!
//! ```rust
//! use param_package::{Error, FromParam, ParamOptions};
//!
//! let result = i32::from_param("notanumber", &ParamOptions::default());
//! assert!(matches!(result, Err(Error::ParseInt { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every way a stored value can fail to decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A serialized pair did not split into exactly one key and one value
    #[error("invalid key pair {0}")]
    InvalidPair(String),

    /// A list or nested package was requested but the value is not bracketed
    #[error("{0} is not bracketed")]
    NotBracketed(String),

    /// The bracketed value is a list or a unit list, not a nested package
    #[error("{value} is {reason}, not a ParamPackage")]
    NotAPackage { value: String, reason: &'static str },

    /// The bracketed value is a list of primitives, not a list of packages
    #[error("{0} is a vector of a primitive type, not a ParamPackage list")]
    NotAPackageList(String),

    /// Integer conversion failed
    #[error("failed to convert {value} to int: {msg}")]
    ParseInt { value: String, msg: String },

    /// Float conversion failed
    #[error("failed to convert {value} to float: {msg}")]
    ParseFloat { value: String, msg: String },

    /// A typed list was requested but the stored list has no items
    #[error("list is empty")]
    EmptyList,

    /// A nested package was read with no bracket levels left
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an integer conversion error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_package::Error;
    ///
    /// let err = Error::parse_int("abc", "invalid digit found in string");
    /// assert!(err.to_string().contains("abc"));
    /// ```
    pub fn parse_int<T: fmt::Display>(value: &str, msg: T) -> Self {
        Error::ParseInt {
            value: value.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a float conversion error.
    pub fn parse_float<T: fmt::Display>(value: &str, msg: T) -> Self {
        Error::ParseFloat {
            value: value.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a structural mismatch error for a value that is not a nested package.
    pub fn not_a_package(value: &str, reason: &'static str) -> Self {
        Error::NotAPackage {
            value: value.to_string(),
            reason,
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_package::Error;
    ///
    /// let err = Error::custom("unknown engine");
    /// assert_eq!(err.to_string(), "unknown engine");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// The log level this error is reported at when it is swallowed by a read.
    ///
    /// Empty numeric lists are an expected outcome and only show up in debug
    /// output; everything else indicates bad stored data.
    #[must_use]
    pub fn level(&self) -> log::Level {
        match self {
            Error::EmptyList => log::Level::Debug,
            _ => log::Level::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
