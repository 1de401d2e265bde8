use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-keyed, string-valued store backing all persisted state.
/// The whole map is written to disk after each mutation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct KvStore {
    entries: BTreeMap<String, String>,
}

impl KvStore {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
