//! Encoding of list- and map-valued fields persisted as JSON text columns.
//!
//! Reads are best effort: an absent, blank or malformed column decodes to the
//! empty collection instead of failing the surrounding query.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A collection stored as serialized JSON text.
pub trait TextColumn: Serialize + DeserializeOwned + Default {
    fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn decode(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(text) if !text.is_empty() => serde_json::from_str(text).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

impl<T> TextColumn for Vec<T> where T: Serialize + DeserializeOwned {}

impl TextColumn for BTreeMap<String, String> {}

/// Trim every entry and drop the blank ones.
pub fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
