// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use cookbook::catalog::{Cookbook, NewEntry, RequiredItem};
use std::io::Write;
use tempfile::NamedTempFile;

/// Seed file contents for the nested example used across tests.
///
/// A requires 2 x B; B requires 3 x C (cook time 5) and 1 x D (cook time 2).
pub const NESTED_SEED: &str = r#"[
    {"type": "ingredient", "name": "C", "cookTime": 5},
    {"type": "ingredient", "name": "D", "cookTime": 2},
    {"type": "recipe", "name": "B", "requiredItems": [
        {"name": "C", "quantity": 3},
        {"name": "D", "quantity": 1}
    ]},
    {"type": "recipe", "name": "A", "requiredItems": [{"name": "B", "quantity": 2}]}
]"#;

/// Create a cookbook holding the nested example.
pub fn nested_cookbook() -> Cookbook {
    let mut cookbook = Cookbook::new();
    cookbook.add_entry(NewEntry::ingredient("C", 5)).unwrap();
    cookbook.add_entry(NewEntry::ingredient("D", 2)).unwrap();
    cookbook
        .add_entry(NewEntry::recipe(
            "B",
            vec![RequiredItem::new("C", 3), RequiredItem::new("D", 1)],
        ))
        .unwrap();
    cookbook
        .add_entry(NewEntry::recipe("A", vec![RequiredItem::new("B", 2)]))
        .unwrap();
    cookbook
}

/// Write `content` to a temporary seed file.
///
/// Keep the returned file alive for as long as the path is used.
pub fn write_seed(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
