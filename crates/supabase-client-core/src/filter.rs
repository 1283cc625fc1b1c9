use std::collections::{BTreeMap, HashMap};
use std::ops::{Deref, DerefMut};

use url::form_urlencoded;

/// Column filters for the REST surface: column name to raw value.
///
/// Every value is sent as a PostgREST equality filter (`eq.<value>`). Other
/// operators are not modelled; a caller wanting one has to spell it inside
/// the value, and it will still be prefixed with `eq.`.
///
/// Keys are kept ordered so the emitted query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(pub BTreeMap<String, String>);

impl Filters {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// A single-entry filter set, typically a primary key.
    pub fn by_key(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut filters = Self::new();
        filters.set(key, value);
        filters
    }

    /// Set a filter value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder-style variant of [`Filters::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Render the filters as `key=eq.<escaped value>` pairs joined by `&`.
    ///
    /// Returns `None` when there is nothing to send.
    pub fn to_query_string(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| format!("{}={}", escape(key), eq_filter(value)))
            .collect();
        Some(pairs.join("&"))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Encode a raw value as a PostgREST equality filter: `eq.` + URL-escaped value.
pub fn eq_filter(value: &str) -> String {
    format!("eq.{}", escape(value))
}

/// `application/x-www-form-urlencoded` escaping (space becomes `+`).
pub(crate) fn escape(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

impl Deref for Filters {
    type Target = BTreeMap<String, String>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Filters {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Filters {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for Filters {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Filters {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}
