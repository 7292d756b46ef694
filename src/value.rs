//! Typed views of stored parameter values.
//!
//! Every value in a [`ParamPackage`] is a string. [`FromParam`] interprets that
//! string as a concrete type and [`IntoParam`] produces it, which together give
//! [`ParamPackage::get`] and [`ParamPackage::set`] their typed overloads.
//!
//! ## Supported Types
//!
//! | Type | Stored as |
//! |------|-----------|
//! | `String` | the text itself |
//! | `i32`, `i64` | decimal digits |
//! | `f32`, `f64` | shortest round-trip decimal |
//! | `Vec<T: ListItem>` | `[a\|b\|c]` |
//! | `ParamPackage` | `[` + serialized package + `]` |
//! | `Vec<ParamPackage>` | `[` + serialized packages joined by `\|` + `]` |
//!
//! ## Examples
//!
//! ```rust
//! use param_package::{FromParam, IntoParam, ParamOptions};
//!
//! let stored = vec![1, 2, 3].into_param();
//! assert_eq!(stored, "[1|2|3]");
//!
//! let items = Vec::<i32>::from_param(&stored, &ParamOptions::default()).unwrap();
//! assert_eq!(items, vec![1, 2, 3]);
//! ```

use crate::de::{decode_list, strip_brackets, Placeholders};
use crate::options::ParamOptions;
use crate::ser::join_list;
use crate::spec::{EMPTY_PLACEHOLDER, LIST_CLOSE, LIST_OPEN, LIST_SEPARATOR, PARAM_SEPARATOR};
use crate::{Error, ParamPackage, Result};
use std::fmt::Display;

/// Interprets a stored string as `Self`.
///
/// Implement this for your own types to read them with [`ParamPackage::get`].
/// Failures are logged by the package and replaced by the caller's default.
///
/// # Examples
///
/// ```rust
/// use param_package::{Error, FromParam, ParamOptions, ParamPackage, Result};
///
/// #[derive(Debug, PartialEq)]
/// enum Engine { Keyboard, Sdl }
///
/// impl FromParam for Engine {
///     fn from_param(raw: &str, _options: &ParamOptions) -> Result<Self> {
///         match raw {
///             "keyboard" => Ok(Engine::Keyboard),
///             "sdl" => Ok(Engine::Sdl),
///             other => Err(Error::custom(format!("unknown engine {}", other))),
///         }
///     }
/// }
///
/// let package: ParamPackage = "engine:sdl".parse().unwrap();
/// assert_eq!(package.get("engine", Engine::Keyboard), Engine::Sdl);
/// ```
pub trait FromParam: Sized {
    /// # Errors
    ///
    /// Returns an error if `raw` does not hold a valid `Self`.
    fn from_param(raw: &str, options: &ParamOptions) -> Result<Self>;
}

/// Produces the stored string for a value.
pub trait IntoParam {
    fn into_param(self) -> String;
}

/// A scalar that can appear as an item of a `|`-separated list.
pub trait ListItem: Sized + Display {
    /// # Errors
    ///
    /// Returns an error if `item` does not parse as `Self`.
    fn parse_item(item: &str) -> Result<Self>;

    /// Whether an empty list is a valid value. Numeric lists treat it as
    /// missing data so the caller's default applies.
    const ALLOW_EMPTY: bool = false;
}

impl FromParam for String {
    fn from_param(raw: &str, _options: &ParamOptions) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl IntoParam for String {
    fn into_param(self) -> String {
        self
    }
}

impl IntoParam for &str {
    fn into_param(self) -> String {
        self.to_string()
    }
}

impl IntoParam for &String {
    fn into_param(self) -> String {
        self.clone()
    }
}

impl ListItem for String {
    fn parse_item(item: &str) -> Result<Self> {
        Ok(item.to_string())
    }

    const ALLOW_EMPTY: bool = true;
}

macro_rules! impl_integer_param {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                fn from_param(raw: &str, _options: &ParamOptions) -> Result<Self> {
                    <$ty as ListItem>::parse_item(raw)
                }
            }

            impl IntoParam for $ty {
                fn into_param(self) -> String {
                    self.to_string()
                }
            }

            impl ListItem for $ty {
                fn parse_item(item: &str) -> Result<Self> {
                    item.trim()
                        .parse::<$ty>()
                        .map_err(|e| Error::parse_int(item, e))
                }
            }
        )*
    };
}

macro_rules! impl_float_param {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                fn from_param(raw: &str, _options: &ParamOptions) -> Result<Self> {
                    <$ty as ListItem>::parse_item(raw)
                }
            }

            // Display for floats is the shortest text that parses back to the same value
            impl IntoParam for $ty {
                fn into_param(self) -> String {
                    self.to_string()
                }
            }

            impl ListItem for $ty {
                fn parse_item(item: &str) -> Result<Self> {
                    item.trim()
                        .parse::<$ty>()
                        .map_err(|e| Error::parse_float(item, e))
                }
            }
        )*
    };
}

impl_integer_param!(i32, i64);
impl_float_param!(f32, f64);

impl<T: ListItem> FromParam for Vec<T> {
    fn from_param(raw: &str, _options: &ParamOptions) -> Result<Self> {
        let items = decode_list(raw)?;
        if items.is_empty() && !T::ALLOW_EMPTY {
            return Err(Error::EmptyList);
        }
        // Any bad item rejects the whole list
        items.iter().map(|item| T::parse_item(item)).collect()
    }
}

impl<T: ListItem> IntoParam for Vec<T> {
    fn into_param(self) -> String {
        join_list(&self)
    }
}

impl<T: ListItem> IntoParam for &[T] {
    fn into_param(self) -> String {
        join_list(self)
    }
}

/// Options for a package read one bracket level further down.
fn nested_options(options: &ParamOptions) -> Result<ParamOptions> {
    options
        .max_depth
        .checked_sub(1)
        .map(|max_depth| options.with_max_depth(max_depth))
        .ok_or(Error::DepthLimitExceeded {
            limit: options.max_depth,
        })
}

impl FromParam for ParamPackage {
    fn from_param(raw: &str, options: &ParamOptions) -> Result<Self> {
        let inner = strip_brackets(raw)?;
        let nested = nested_options(options)?;
        if inner == EMPTY_PLACEHOLDER {
            return Ok(ParamPackage::with_options(nested));
        }

        // Only the outer level decides what the payload is
        let mut lookup = Placeholders::new();
        let outer = lookup.mask(inner, nested.max_depth);
        if outer.contains(LIST_SEPARATOR) {
            return Err(Error::not_a_package(raw, "a vector"));
        }
        if !outer.contains(PARAM_SEPARATOR) {
            return Err(Error::not_a_package(
                raw,
                "a unit vector of a primitive type",
            ));
        }

        Ok(ParamPackage::from_str_with_options(inner, nested))
    }
}

impl IntoParam for ParamPackage {
    fn into_param(self) -> String {
        (&self).into_param()
    }
}

impl IntoParam for &ParamPackage {
    fn into_param(self) -> String {
        format!("{}{}{}", LIST_OPEN, self.serialize(), LIST_CLOSE)
    }
}

impl FromParam for Vec<ParamPackage> {
    fn from_param(raw: &str, options: &ParamOptions) -> Result<Self> {
        let inner = strip_brackets(raw)?;
        let nested = nested_options(options)?;

        let mut lookup = Placeholders::new();
        let outer = lookup.mask(inner, nested.max_depth);
        if !outer.contains(PARAM_SEPARATOR) {
            return Err(Error::NotAPackageList(raw.to_string()));
        }

        Ok(outer
            .split(LIST_SEPARATOR)
            .map(|item| ParamPackage::from_str_with_options(&lookup.restore(item), nested))
            .collect())
    }
}

impl IntoParam for Vec<ParamPackage> {
    fn into_param(self) -> String {
        self.as_slice().into_param()
    }
}

impl IntoParam for &[ParamPackage] {
    fn into_param(self) -> String {
        let serialized: Vec<String> = self.iter().map(ParamPackage::serialize).collect();
        join_list(&serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ParamOptions {
        ParamOptions::default()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(i32::from_param("42", &options()).unwrap(), 42);
        assert_eq!(i32::from_param(" -7 ", &options()).unwrap(), -7);
        assert!(i32::from_param("4.5", &options()).is_err());
        assert!(i32::from_param("99999999999", &options()).is_err());
        assert_eq!(i64::from_param("99999999999", &options()).unwrap(), 99_999_999_999);
        assert_eq!(f32::from_param("0.25", &options()).unwrap(), 0.25);
        assert!(matches!(
            f32::from_param("abc", &options()),
            Err(Error::ParseFloat { .. })
        ));
    }

    #[test]
    fn test_float_text_round_trips() {
        for value in [0.1f32, 1.0 / 3.0, -2.5e-8, 123_456.78] {
            let text = value.into_param();
            assert_eq!(f32::from_param(&text, &options()).unwrap(), value);
        }
        assert_eq!(1.5f32.into_param(), "1.5");
    }

    #[test]
    fn test_lists() {
        let strings = Vec::<String>::from_param("[a|b|c]", &options()).unwrap();
        assert_eq!(strings, vec!["a", "b", "c"]);

        assert!(Vec::<String>::from_param("[]", &options()).unwrap().is_empty());
        assert_eq!(
            Vec::<i32>::from_param("[]", &options()),
            Err(Error::EmptyList)
        );
        assert!(matches!(
            Vec::<i32>::from_param("[1|x|3]", &options()),
            Err(Error::ParseInt { .. })
        ));
        assert!(matches!(
            Vec::<i32>::from_param("7", &options()),
            Err(Error::NotBracketed(_))
        ));
        assert_eq!(
            Vec::<f64>::from_param("[0.5|2]", &options()).unwrap(),
            vec![0.5, 2.0]
        );
    }

    #[test]
    fn test_list_into_param() {
        assert_eq!(vec!["a".to_string(), "b".to_string()].into_param(), "[a|b]");
        assert_eq!([1i64, 2].as_slice().into_param(), "[1|2]");
        assert_eq!(Vec::<f32>::new().into_param(), "[]");
    }

    #[test]
    fn test_package_structure_checks() {
        assert!(matches!(
            ParamPackage::from_param("[1|2]", &options()),
            Err(Error::NotAPackage { .. })
        ));
        assert!(matches!(
            ParamPackage::from_param("[a:1]", &options()),
            Err(Error::NotAPackage { .. })
        ));
        assert!(matches!(
            ParamPackage::from_param("a:1,b:2", &options()),
            Err(Error::NotBracketed(_))
        ));

        let package = ParamPackage::from_param("[a:1,b:[x|y]]", &options()).unwrap();
        assert_eq!(package.get_raw("a"), Some("1"));
        assert_eq!(package.get_raw("b"), Some("[x|y]"));

        let empty = ParamPackage::from_param("[[empty]]", &options()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_package_list() {
        let raw = "[a:1,b:2|c:3,d:[4|5]]";
        let packages = Vec::<ParamPackage>::from_param(raw, &options()).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].get_raw("b"), Some("2"));
        assert_eq!(packages[1].get_raw("d"), Some("[4|5]"));

        assert!(matches!(
            Vec::<ParamPackage>::from_param("[1|2|3]", &options()),
            Err(Error::NotAPackageList(_))
        ));
    }

    #[test]
    fn test_nested_reads_use_one_level_of_depth() {
        let shallow = ParamOptions::new().with_max_depth(1);
        let package = ParamPackage::from_param("[a:1,b:2]", &shallow).unwrap();
        assert_eq!(package.options().max_depth, 0);

        let exhausted = ParamOptions::new().with_max_depth(0);
        assert_eq!(
            ParamPackage::from_param("[a:1,b:2]", &exhausted),
            Err(Error::DepthLimitExceeded { limit: 0 })
        );
        assert_eq!(
            Vec::<ParamPackage>::from_param("[a:1,b:2|c:3,d:4]", &exhausted),
            Err(Error::DepthLimitExceeded { limit: 0 })
        );
    }
}
