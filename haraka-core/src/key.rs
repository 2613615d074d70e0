//! Cache-key derivation.
//!
//! A cache key addresses one cached response: the resource path, plus an
//! optional query-parameter set serialized in canonical order so that
//! semantically equal parameter sets always map to the same key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered query parameters for cache-key derivation.
///
/// Backed by a `BTreeMap`, so iteration is always lexicographic by
/// parameter name regardless of insertion order. Values are JSON, matching
/// what a REST client would put on the query string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a parameter, replacing any previous value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates parameters in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, Value>> for QueryParams {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

/// Derives the cache key for a resource and optional parameter set.
///
/// Without parameters the key is the resource path verbatim. With
/// parameters, `name=<json>` pairs are joined by `&` in lexicographic name
/// order and appended after `?`:
///
/// ```rust
/// use haraka_core::key::{cache_key, QueryParams};
///
/// let params = QueryParams::new().with("role", "admin").with("page", 2);
/// assert_eq!(
///     cache_key("/users", Some(&params)),
///     "/users?page=2&role=\"admin\""
/// );
/// assert_eq!(cache_key("/users", None), "/users");
/// ```
pub fn cache_key(resource: &str, params: Option<&QueryParams>) -> String {
    let params = match params {
        Some(params) => params,
        None => return resource.to_string(),
    };

    let serialized = params
        .iter()
        .map(|(name, value)| format!("{}={}", name, json_fragment(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", resource, serialized)
}

/// Serializes a JSON value deterministically: object keys are emitted in
/// sorted order at every nesting level, so equal values always produce
/// equal fragments.
fn json_fragment(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(json_fragment).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(fields) => {
            let mut pairs: Vec<_> = fields.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            let fields: Vec<String> = pairs
                .iter()
                .map(|(name, value)| format!("\"{}\":{}", name, json_fragment(value)))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
    }
}
