//! [`QueryObject`]-style patch application -> URL query string.

use crate::patch::{Patch, PatchValue};

/// Apply `patch` on top of `current_query_string`, returning the resulting
/// query string (without a leading `?`).
///
/// A scalar-patched key that already appears in `current_query_string`
/// keeps its original position: `encode("a=1&b=2", patch!{"a" => 3})` is
/// `"a=3&b=2"`, not `"b=2&a=3"`. A key with no prior occurrence is appended
/// at the end in patch-insertion order. [`PatchValue::Remove`] drops every
/// occurrence of the key, as does a scalar or list value that trims down to
/// nothing. A [`PatchValue::List`] removes every prior occurrence of the key
/// and then appends one pair per non-blank, trimmed element at the *end* of
/// the query string, in list order — mirroring `URLSearchParams`'
/// `delete(key)` followed by one `append(key, item)` per element, which
/// always lands new entries after every untouched pair regardless of where
/// the key used to sit.
pub fn encode(current_query_string: &str, patch: &Patch) -> String {
    let trimmed = current_query_string
        .strip_prefix('?')
        .unwrap_or(current_query_string);

    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(trimmed.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    for (key, value) in patch.iter() {
        match value {
            PatchValue::Remove => remove_all(&mut pairs, key),
            PatchValue::List(items) => {
                let trimmed: Vec<String> = items
                    .iter()
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect();
                if trimmed.is_empty() {
                    remove_all(&mut pairs, key);
                } else {
                    replace_multi(&mut pairs, key, &trimmed);
                }
            }
            PatchValue::Scalar(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    remove_all(&mut pairs, key);
                } else {
                    replace_single(&mut pairs, key, trimmed.to_string());
                }
            }
        }
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn remove_all(pairs: &mut Vec<(String, String)>, key: &str) {
    pairs.retain(|(k, _)| k != key);
}

fn first_index(pairs: &[(String, String)], key: &str) -> Option<usize> {
    pairs.iter().position(|(k, _)| k == key)
}

fn replace_single(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match first_index(pairs, key) {
        Some(index) => {
            pairs[index].1 = value;
            let mut seen_first = false;
            pairs.retain(|(k, _)| {
                if k != key {
                    return true;
                }
                if seen_first {
                    false
                } else {
                    seen_first = true;
                    true
                }
            });
        }
        None => pairs.push((key.to_string(), value)),
    }
}

fn replace_multi(pairs: &mut Vec<(String, String)>, key: &str, items: &[String]) {
    remove_all(pairs, key);
    for item in items {
        pairs.push((key.to_string(), item.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch;

    #[test]
    fn replaces_a_key_in_place() {
        let result = encode("a=1&b=2", &patch! { "a" => 3i64 });
        assert_eq!(result, "a=3&b=2");
    }

    #[test]
    fn appends_brand_new_keys() {
        let result = encode("a=1", &patch! { "c" => 5i64 });
        assert_eq!(result, "a=1&c=5");
    }

    #[test]
    fn clear_removes_every_occurrence() {
        let result = encode("a=1&b=2&a=3", &patch!().clear("a"));
        assert_eq!(result, "b=2");
    }

    #[test]
    fn blank_scalar_removes_the_key() {
        let result = encode("a=1", &patch! { "a" => "" });
        assert_eq!(result, "");
    }

    #[test]
    fn list_moves_the_key_to_the_end_with_one_pair_per_element() {
        let result = encode(
            "a=1&b=2",
            &Patch::new().set("a", vec!["x".to_string(), "y".to_string()]),
        );
        assert_eq!(result, "b=2&a=x&a=y");
    }

    #[test]
    fn list_patch_on_a_middle_key_lands_after_every_untouched_key() {
        let result = encode(
            "a=1&tag=x&b=2",
            &Patch::new().set("tag", vec!["y".to_string(), "z".to_string()]),
        );
        assert_eq!(result, "a=1&b=2&tag=y&tag=z");
    }

    #[test]
    fn list_of_all_blank_items_removes_the_key() {
        let result = encode(
            "a=1&b=2",
            &Patch::new().set("a", vec!["  ".to_string(), "".to_string()]),
        );
        assert_eq!(result, "b=2");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let result = encode("a=1&b=2", &Patch::new());
        assert_eq!(result, "a=1&b=2");
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        let result = encode("?a=1", &patch! { "a" => 2i64 });
        assert_eq!(result, "a=2");
    }
}
