//! URL query string -> [`QueryObject`].

use std::collections::BTreeMap;

use crate::scalar::scalar_from_str;
use crate::value::{QueryObject, QueryValue};

/// Decode `query_string` (with or without a leading `?`) into a
/// [`QueryObject`].
///
/// - Every occurrence of a key is trimmed and blank occurrences are dropped
///   *before* counting: a key with more than one non-blank occurrence
///   becomes a [`QueryValue::List`] holding the trimmed, non-blank values in
///   the order they appeared.
/// - Otherwise (zero or one non-blank occurrences) the key is decoded from
///   its *first raw occurrence* — mirroring `URLSearchParams.get()`, which
///   always returns the first occurrence regardless of which one (if any)
///   was non-blank. That occurrence becomes [`QueryValue::Number`] when its
///   trimmed text round-trips losslessly through [`scalar_from_str`],
///   [`QueryValue::Text`] otherwise, or is dropped entirely if it trims to
///   blank (`a=` or bare `a`, or `a=&a=2` where the first occurrence is the
///   blank one) rather than surfacing as an empty string.
/// - Keys present in `defaults` but absent from the string are copied into
///   the result unchanged, so callers always see a complete object for the
///   keys they care about. A key that *does* appear in the string masks its
///   default even when every occurrence is blank: `decode("a=", ...)` leaves
///   `a` absent, it does not resurrect the default.
pub fn decode(query_string: &str, defaults: Option<&QueryObject>) -> QueryObject {
    let trimmed = query_string.strip_prefix('?').unwrap_or(query_string);

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut order: Vec<String> = Vec::new();
    for (key, value) in form_urlencoded::parse(trimmed.as_bytes()) {
        let key = key.into_owned();
        if !grouped.contains_key(&key) {
            order.push(key.clone());
        }
        grouped.entry(key).or_default().push(value.into_owned());
    }

    let mut result = QueryObject::new();
    if let Some(defaults) = defaults {
        for (key, value) in defaults {
            if !grouped.contains_key(key) {
                result.insert(key.clone(), value.clone());
            }
        }
    }

    for key in order {
        let values = grouped.remove(&key).unwrap_or_default();
        if let Some(value) = decode_values(values) {
            result.insert(key, value);
        }
    }

    result
}

fn decode_values(values: Vec<String>) -> Option<QueryValue> {
    let non_blank: Vec<String> = values
        .iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();

    if non_blank.len() > 1 {
        return Some(QueryValue::List(non_blank));
    }

    // Zero or one non-blank values: mirror `URLSearchParams.get()`, which
    // always returns the *first* raw occurrence regardless of which
    // occurrence (if any) turned out non-blank.
    let raw = values.into_iter().next()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match scalar_from_str(trimmed) {
        Some(number) => Some(QueryValue::Number(number)),
        None => Some(QueryValue::Text(trimmed.to_string())),
    }
}
