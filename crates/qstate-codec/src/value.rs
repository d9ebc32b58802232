//! Query Object data model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single key's decoded value: a number, a string, or a multi-value list.
///
/// A present key is never an empty string; empty values are normalized to
/// absence (the key simply missing from the [`QueryObject`]) during decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// A flat key-value mapping decoded from (or destined for) a URL query
/// string. Key order is not semantically significant, hence `BTreeMap`.
pub type QueryObject = BTreeMap<String, QueryValue>;
