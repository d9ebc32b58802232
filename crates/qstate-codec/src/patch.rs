//! Patches: the sparse, key-to-new-value edits applied on top of an existing
//! query string by [`crate::encode`].

use crate::scalar::format_number;

/// The value a single key is being set to (or cleared from) by a [`Patch`].
/// `Scalar`/`List` already carry their rendered text: the `From` impls
/// below do the number-to-string formatting at construction time, so
/// `encode` only ever has to trim, never format. Both variants accept the
/// same scalar shapes (`f64`, `i64`, `&str`, `String`), just wrapped in
/// `Vec` for `List`, so a numeric list patch never needs its caller to
/// pre-format elements by hand.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchValue {
    Scalar(String),
    List(Vec<String>),
    /// Remove the key entirely.
    Remove,
}

impl From<f64> for PatchValue {
    fn from(value: f64) -> Self {
        PatchValue::Scalar(format_number(value))
    }
}

impl From<i64> for PatchValue {
    fn from(value: i64) -> Self {
        PatchValue::Scalar(format_number(value as f64))
    }
}

impl From<&str> for PatchValue {
    fn from(value: &str) -> Self {
        PatchValue::Scalar(value.to_string())
    }
}

impl From<String> for PatchValue {
    fn from(value: String) -> Self {
        PatchValue::Scalar(value)
    }
}

impl From<Vec<String>> for PatchValue {
    fn from(value: Vec<String>) -> Self {
        PatchValue::List(value)
    }
}

impl From<Vec<&str>> for PatchValue {
    fn from(value: Vec<&str>) -> Self {
        PatchValue::List(value.into_iter().map(|item| item.to_string()).collect())
    }
}

impl From<Vec<f64>> for PatchValue {
    fn from(value: Vec<f64>) -> Self {
        PatchValue::List(value.into_iter().map(format_number).collect())
    }
}

impl From<Vec<i64>> for PatchValue {
    fn from(value: Vec<i64>) -> Self {
        PatchValue::List(value.into_iter().map(|item| format_number(item as f64)).collect())
    }
}

impl<T> From<Option<T>> for PatchValue
where
    PatchValue: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => PatchValue::from(inner),
            None => PatchValue::Remove,
        }
    }
}

/// An ordered set of key edits to apply to a query string. Keys already
/// present in the source string keep their original position during
/// `encode`; a key new to the string is appended in the order it was
/// inserted into the patch. A plain `Vec` rather than a sorted map keeps
/// that insertion order observable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    edits: Vec<(String, PatchValue)>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. A repeated `set`/`clear` for the same key
    /// overwrites the value in place rather than moving it to the end.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<PatchValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.edits.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.edits.push((key, value)),
        }
        self
    }

    /// Mark `key` for removal.
    pub fn clear(self, key: impl Into<String>) -> Self {
        self.set(key, PatchValue::Remove)
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatchValue)> {
        self.edits.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&PatchValue> {
        self.edits.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// Build a [`Patch`] from `key => value` pairs, mirroring the ergonomics of
/// a map literal macro.
///
/// ```
/// use qstate_codec::patch;
///
/// let p = patch! { "q" => "rust", "page" => 2i64 };
/// assert_eq!(p.get("q"), Some(&qstate_codec::PatchValue::Scalar("rust".into())));
/// ```
#[macro_export]
macro_rules! patch {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut p = $crate::Patch::new();
        $(
            p = p.set($key, $value);
        )*
        p
    }};
}
