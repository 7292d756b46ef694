/// Builds a [`ParamPackage`](crate::ParamPackage) from `key: value` entries.
///
/// Each value goes through [`ParamPackage::set`](crate::ParamPackage::set), so
/// anything implementing [`IntoParam`](crate::IntoParam) is accepted: strings,
/// numbers, lists and other packages.
///
/// # Examples
///
/// ```rust
/// use param_package::params;
///
/// let button = params! {
///     "engine": "keyboard",
///     "code": 65,
///     "modifiers": vec![1, 2],
/// };
/// assert_eq!(button.serialize(), "code:65,engine:keyboard,modifiers:[1|2]");
///
/// let empty = params! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! params {
    // Handle empty package
    () => {
        $crate::ParamPackage::new()
    };

    // Handle non-empty package
    ($($key:literal : $value:expr),+ $(,)?) => {{
        let mut package = $crate::ParamPackage::new();
        $(
            package.set($key, $value);
        )+
        package
    }};
}
