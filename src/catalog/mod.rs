// src/catalog/mod.rs

//! Cookbook catalog: entries, validation and recipe resolution
//!
//! The catalog holds two kinds of entries that share one namespace:
//! - **Ingredient**: a base entry with a fixed per-unit cook time
//! - **Recipe**: a list of `(item name, quantity)` requirements, each naming
//!   another entry
//!
//! Entries are validated once on creation and never change afterwards. A
//! summary flattens a recipe into the total quantity of every base
//! ingredient it needs and the total cook time of those ingredients.
//!
//! # Example
//!
//! ```
//! use cookbook::catalog::{Cookbook, NewEntry, RequiredItem};
//!
//! let mut cookbook = Cookbook::new();
//! cookbook.add_entry(NewEntry::ingredient("C", 5)).unwrap();
//! cookbook.add_entry(NewEntry::ingredient("D", 2)).unwrap();
//! cookbook
//!     .add_entry(NewEntry::recipe(
//!         "B",
//!         vec![RequiredItem::new("C", 3), RequiredItem::new("D", 1)],
//!     ))
//!     .unwrap();
//! cookbook
//!     .add_entry(NewEntry::recipe("A", vec![RequiredItem::new("B", 2)]))
//!     .unwrap();
//!
//! let summary = cookbook.summary("A").unwrap();
//! assert_eq!(summary.cook_time, 34);
//! ```

mod entry;
mod resolve;
pub mod seed;
mod store;
mod summary;
mod validate;

pub use entry::{Entry, EntryKind, Ingredient, Recipe, RequiredItem};
pub use resolve::{resolve, IngredientCounts, Resolution, ResolutionError, Resolver};
pub use seed::SeedError;
pub use store::EntryStore;
pub use summary::{build_summary, IngredientQuantity, Summary};
pub use validate::{validate_entry, NewEntry, ValidationError};

use crate::name::normalize_name;
use std::path::Path;
use tracing::{debug, info};

/// The cookbook: an entry store plus the operations allowed on it
///
/// Not synchronized; share it behind a lock so that validation and append
/// happen under one writer.
#[derive(Debug, Default)]
pub struct Cookbook {
    store: EntryStore,
}

impl Cookbook {
    /// Create an empty cookbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cookbook from a seed file
    pub fn from_seed_file(path: &Path) -> crate::Result<Self> {
        let mut cookbook = Self::new();
        let requests = seed::read_seed_file(path)?;
        let added = seed::apply_seed(&mut cookbook, requests)?;
        info!("Seeded cookbook with {} entries from {}", added, path.display());
        Ok(cookbook)
    }

    /// Validate a creation request and add the resulting entry
    ///
    /// A rejected request leaves the cookbook untouched.
    pub fn add_entry(&mut self, request: NewEntry) -> Result<(), ValidationError> {
        let entry = validate_entry(request, &self.store)?;
        let display_name = normalize_name(entry.name());
        debug!(
            name = entry.name(),
            kind = %entry.kind(),
            display = display_name.as_deref().unwrap_or(""),
            "Adding cookbook entry"
        );
        self.store.append(entry);
        Ok(())
    }

    /// Build the summary for a recipe
    pub fn summary(&self, name: &str) -> Result<Summary, ResolutionError> {
        build_summary(&self.store, name)
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.store.lookup(name)
    }

    /// Iterate over all entries in creation order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_get() {
        let mut cookbook = Cookbook::new();
        cookbook.add_entry(NewEntry::ingredient("Egg", 6)).unwrap();
        assert_eq!(cookbook.get("Egg"), Some(&Entry::ingredient("Egg", 6)));
        assert_eq!(cookbook.len(), 1);
    }

    #[test]
    fn test_add_entry_with_unprintable_name() {
        // Names are stored as given even when they normalize to nothing
        let mut cookbook = Cookbook::new();
        cookbook.add_entry(NewEntry::ingredient("42", 1)).unwrap();
        cookbook.add_entry(NewEntry::recipe("riso-tto", vec![])).unwrap();
        assert!(cookbook.get("42").is_some());
        assert!(cookbook.get("riso-tto").is_some());
    }

    #[test]
    fn test_rejected_entry_has_no_side_effect() {
        let mut cookbook = Cookbook::new();
        cookbook.add_entry(NewEntry::ingredient("Egg", 6)).unwrap();

        assert!(cookbook.add_entry(NewEntry::ingredient("Egg", 1)).is_err());
        assert!(cookbook.add_entry(NewEntry::ingredient("Salt", -1)).is_err());

        assert_eq!(cookbook.len(), 1);
        assert!(cookbook.get("Salt").is_none());
        assert_eq!(cookbook.get("Egg"), Some(&Entry::ingredient("Egg", 6)));
    }

    #[test]
    fn test_recipe_added_before_its_items() {
        let mut cookbook = Cookbook::new();
        cookbook
            .add_entry(NewEntry::recipe("Toast", vec![RequiredItem::new("Bread", 2)]))
            .unwrap();
        assert!(matches!(
            cookbook.summary("Toast"),
            Err(ResolutionError::UnresolvedReference { .. })
        ));

        cookbook.add_entry(NewEntry::ingredient("Bread", 4)).unwrap();
        assert_eq!(cookbook.summary("Toast").unwrap().cook_time, 8);
    }

    #[test]
    fn test_entries_in_creation_order() {
        let mut cookbook = Cookbook::new();
        cookbook.add_entry(NewEntry::ingredient("Salt", 0)).unwrap();
        cookbook.add_entry(NewEntry::recipe("Brine", vec![])).unwrap();
        let names: Vec<&str> = cookbook.entries().map(Entry::name).collect();
        assert_eq!(names, vec!["Salt", "Brine"]);
    }
}
