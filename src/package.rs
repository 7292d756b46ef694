//! The [`ParamPackage`] container.
//!
//! A package maps string keys to string values, ordered by key. Values are
//! read and written through typed accessors; see [`crate::value`] for the
//! supported types.
//!
//! ## Examples
//!
//! ```rust
//! use param_package::ParamPackage;
//!
//! let mut package = ParamPackage::new();
//! package.set("engine", "keyboard");
//! package.set("code", 65);
//! package.set("modifiers", vec![1, 2]);
//!
//! let text = package.serialize();
//! assert_eq!(text, "code:65,engine:keyboard,modifiers:[1|2]");
//!
//! let decoded: ParamPackage = text.parse().unwrap();
//! assert_eq!(decoded.get("code", 0), 65);
//! assert_eq!(decoded.get("modifiers", Vec::<i32>::new()), vec![1, 2]);
//! ```

use crate::de::parse_pairs;
use crate::options::ParamOptions;
use crate::ser::serialize_pairs;
use crate::value::{FromParam, IntoParam};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Backing map of a package.
pub type DataType = BTreeMap<String, String>;

/// A string-based key-value container that serializes to a single line of text.
///
/// Reads never fail: a missing key, a malformed value or a value of the wrong
/// shape is logged and the caller's default is returned instead.
///
/// # Examples
///
/// ```rust
/// use param_package::ParamPackage;
///
/// let package = ParamPackage::from_pairs([("engine", "sdl"), ("port", "0")]);
/// assert!(package.has("engine"));
/// assert_eq!(package.get("port", -1), 0);
/// assert_eq!(package.get("missing", -1), -1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParamPackage {
    data: DataType,
    options: ParamOptions,
}

impl ParamPackage {
    /// Creates an empty package.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty package that decodes nested values with `options`.
    #[must_use]
    pub fn with_options(options: ParamOptions) -> Self {
        ParamPackage {
            data: DataType::new(),
            options,
        }
    }

    /// Decodes a serialized package with custom options.
    ///
    /// Malformed pairs are skipped. Brackets nested deeper than
    /// [`ParamOptions::max_depth`] are kept as plain text inside the value
    /// that contains them.
    #[must_use]
    pub fn from_str_with_options(serialized: &str, options: ParamOptions) -> Self {
        ParamPackage {
            data: parse_pairs(serialized, &options),
            options,
        }
    }

    /// Builds a package from already-decoded key/value strings.
    ///
    /// Values are stored as given, without escaping or validation.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Returns the options used to decode nested values.
    #[must_use]
    pub fn options(&self) -> ParamOptions {
        self.options
    }

    /// Encodes the package as a single line.
    ///
    /// An empty package encodes as `[empty]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_package::ParamPackage;
    ///
    /// assert_eq!(ParamPackage::new().serialize(), "[empty]");
    ///
    /// let mut package = ParamPackage::new();
    /// package.set("a", "x:y,z$w");
    /// assert_eq!(package.serialize(), "a:x$0y$1z$2w");
    /// ```
    #[must_use]
    pub fn serialize(&self) -> String {
        serialize_pairs(&self.data)
    }

    /// Reads `key` as a `T`, or returns `default` if it is missing or does not
    /// decode as a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_package::ParamPackage;
    ///
    /// let package: ParamPackage = "k:notanumber,list:[0.5|1.5]".parse().unwrap();
    /// assert_eq!(package.get("k", 5), 5);
    /// assert_eq!(package.get("k", String::new()), "notanumber");
    /// assert_eq!(package.get("list", Vec::<f32>::new()), vec![0.5, 1.5]);
    /// ```
    pub fn get<T: FromParam>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.data.get(key) else {
            log::debug!("key {} not found", key);
            return default;
        };

        match T::from_param(raw, &self.options) {
            Ok(value) => value,
            Err(err) => {
                log::log!(err.level(), "{}: {}", key, err);
                default
            }
        }
    }

    /// Returns the stored text of `key` without interpreting it.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_package::ParamPackage;
    ///
    /// let mut inner = ParamPackage::new();
    /// inner.set("axis", 0);
    /// inner.set("engine", "sdl");
    ///
    /// let mut outer = ParamPackage::new();
    /// outer.set("stick", &inner);
    /// assert_eq!(outer.get_raw("stick"), Some("[axis:0,engine:sdl]"));
    /// assert_eq!(outer.get("stick", ParamPackage::new()), inner);
    /// ```
    pub fn set<K: Into<String>, T: IntoParam>(&mut self, key: K, value: T) {
        self.data.insert(key.into(), value.into_param());
    }

    /// Returns `true` if the package contains `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Removes `key`, returning its stored text if it was present.
    pub fn erase(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the keys, in order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, String> {
        self.data.keys()
    }

    /// Returns an iterator over the key/value pairs, in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.data.iter()
    }

    /// Returns an iterator that allows modifying each stored value.
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, String> {
        self.data.iter_mut()
    }
}

/// Packages compare by content; decode options are not part of it.
impl PartialEq for ParamPackage {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for ParamPackage {}

impl FromStr for ParamPackage {
    type Err = Infallible;

    fn from_str(serialized: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_with_options(serialized, ParamOptions::default()))
    }
}

impl fmt::Display for ParamPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamPackage {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut package = ParamPackage::new();
        package.extend(iter);
        package
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParamPackage {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.data
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ParamPackage {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<ParamPackage> for DataType {
    fn from(package: ParamPackage) -> Self {
        package.data
    }
}

impl IntoIterator for ParamPackage {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParamPackage {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a mut ParamPackage {
    type Item = (&'a String, &'a mut String);
    type IntoIter = btree_map::IterMut<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl Serialize for ParamPackage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ParamPackage::serialize(self))
    }
}

impl<'de> Deserialize<'de> for ParamPackage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let serialized = String::deserialize(deserializer)?;
        Ok(Self::from_str_with_options(&serialized, ParamOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding() -> ParamPackage {
        let mut package = ParamPackage::new();
        package.set("engine", "keyboard");
        package.set("code", 65);
        package
    }

    #[test]
    fn test_empty_package() {
        let package = ParamPackage::new();
        assert_eq!(package.serialize(), "[empty]");
        assert_eq!(package.to_string(), "[empty]");

        let decoded: ParamPackage = "[empty]".parse().unwrap();
        assert!(decoded.is_empty());
        assert!(!decoded.has("anything"));
    }

    #[test]
    fn test_set_overwrites() {
        let mut package = binding();
        package.set("code", 66);
        assert_eq!(package.get("code", 0), 66);
        assert_eq!(package.len(), 2);
    }

    #[test]
    fn test_erase_and_clear() {
        let mut package = binding();
        assert_eq!(package.erase("code"), Some("65".to_string()));
        assert_eq!(package.erase("code"), None);
        assert!(!package.has("code"));

        package.clear();
        assert!(package.is_empty());
        assert_eq!(package.serialize(), "[empty]");
    }

    #[test]
    fn test_serialize_sorted_by_key() {
        let package = ParamPackage::from([("b", "2"), ("a", "1"), ("c", "3")]);
        assert_eq!(package.serialize(), "a:1,b:2,c:3");

        let keys: Vec<_> = package.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_pairs_stores_raw() {
        let package = ParamPackage::from_pairs([("k", "a:b")]);
        assert_eq!(package.get_raw("k"), Some("a:b"));
        assert_eq!(package.serialize(), "k:a$0b");
    }

    #[test]
    fn test_iteration() {
        let mut package = binding();
        for (_, value) in &mut package {
            value.push('!');
        }
        let pairs: Vec<(String, String)> = package.into_iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("code".to_string(), "65!".to_string()),
                ("engine".to_string(), "keyboard!".to_string()),
            ]
        );
    }

    #[test]
    fn test_equality_ignores_options() {
        let text = binding().serialize();
        let strict =
            ParamPackage::from_str_with_options(&text, ParamOptions::new().with_max_depth(1));
        assert_eq!(strict, binding());
        assert_eq!(strict.options().max_depth, 1);
    }

    #[test]
    fn test_nested_inherits_options() {
        let text = "inner:[a:[1],b:2],x:1";
        let package =
            ParamPackage::from_str_with_options(text, ParamOptions::new().with_max_depth(2));
        let inner = package.get("inner", ParamPackage::new());
        assert_eq!(inner.options().max_depth, 1);
        assert_eq!(inner.get("a", Vec::<i32>::new()), vec![1]);
    }

    #[test]
    fn test_depth_limit_keeps_deep_text() {
        let options = ParamOptions::new().with_max_depth(1);
        let mut package = ParamPackage::from_str_with_options("a:[[1]],b:2", options);
        assert_eq!(package.len(), 2);
        assert_eq!(package.get_raw("a"), Some("[[1]]"));
        assert_eq!(package.get("b", 0), 2);

        // One level is spent on `inner`, none is left for `deeper`
        package.set("inner", binding());
        let mut inner = package.get("inner", ParamPackage::new());
        assert_eq!(inner, binding());
        inner.set("deeper", binding());
        assert!(inner.get("deeper", ParamPackage::new()).is_empty());
    }
}
