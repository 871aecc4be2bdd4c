//! Owned form state: one map of field key → string value.
//!
//! The store is the single writer for form values during an editing session.
//! Every known key always has a defined value; readers never see an absent
//! key differently from an empty one. Updates are patch-style merges, and
//! each merge bumps a revision counter so downstream consumers (preview
//! memoization) can detect change cheaply.

use crate::schema;
use std::collections::BTreeMap;

/// Seed values re-applied by [`FormStore::reset`] and present at creation:
/// default time window and the organization name.
pub const SEED_DEFAULTS: &[(&str, &str)] = &[
    ("timeStart", "09:00"),
    ("timeEnd", "17:00"),
    ("club", "京都衣笠クラブ"),
];

/// Mutable owner of the form's key → value map.
#[derive(Debug, Clone)]
pub struct FormStore {
    values: BTreeMap<String, String>,
    revision: u64,
}

impl FormStore {
    /// All schema and date/time keys set to `""`, then the seed defaults.
    pub fn new() -> Self {
        let mut store = Self {
            values: BTreeMap::new(),
            revision: 0,
        };
        store.reset();
        store
    }

    /// Read a value. Unknown keys read as the empty string.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Merge a patch into the store. `None` values are normalized to `""`
    /// before the merge, so the map never holds an undefined value. Keys not
    /// named in the patch are untouched.
    pub fn update<I, K>(&mut self, patch: I)
    where
        I: IntoIterator<Item = (K, Option<String>)>,
        K: Into<String>,
    {
        for (key, value) in patch {
            self.values.insert(key.into(), value.unwrap_or_default());
        }
        self.revision += 1;
    }

    /// Set a single key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
        self.revision += 1;
    }

    /// Clear every known key to `""`, then re-apply [`SEED_DEFAULTS`].
    pub fn reset(&mut self) {
        self.values.clear();
        for key in schema::all_keys() {
            self.values.insert(key.to_string(), String::new());
        }
        for (key, value) in SEED_DEFAULTS {
            self.values.insert((*key).to_string(), (*value).to_string());
        }
        self.revision += 1;
    }

    /// Snapshot of the full map, for persistence and mapping builds.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }

    /// Replace the whole map with a restored snapshot.
    pub fn restore_snapshot(&mut self, snapshot: BTreeMap<String, String>) {
        self.values = snapshot;
        self.revision += 1;
    }

    /// Monotonic change counter; bumps on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
