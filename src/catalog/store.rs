// src/catalog/store.rs

//! Append-only, name-indexed entry store
//!
//! The store performs no validation of its own. Callers go through
//! [`crate::catalog::Cookbook::add_entry`], which validates under the same
//! lock before appending.

use super::entry::Entry;
use std::collections::HashMap;

/// Entries in insertion order with an O(1) name index
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    /// Key: entry name, Value: position in `entries`
    index: HashMap<String, usize>,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by name
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    /// Check if an entry with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Append an entry
    ///
    /// Names must be unique. An entry whose name is already indexed would
    /// shadow the earlier one, so callers validate first.
    pub fn append(&mut self, entry: Entry) {
        debug_assert!(!self.contains(entry.name()), "duplicate entry name");
        self.index.insert(entry.name().to_string(), self.entries.len());
        self.entries.push(entry);
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
