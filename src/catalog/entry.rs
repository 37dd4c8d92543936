// src/catalog/entry.rs

//! Cookbook entry model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of cookbook entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Recipe,
    Ingredient,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Recipe => "recipe",
            EntryKind::Ingredient => "ingredient",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recipe" => Ok(EntryKind::Recipe),
            "ingredient" => Ok(EntryKind::Ingredient),
            _ => Err(format!("Invalid entry type: {s}")),
        }
    }
}

/// One line of a recipe: another entry and how many of it are needed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A base entry with a fixed per-unit cook time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub cook_time: i64,
}

/// A composite entry built from other entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A named item in the cookbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// Create an ingredient entry
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Entry::Ingredient(Ingredient {
            name: name.into(),
            cook_time,
        })
    }

    /// Create a recipe entry
    pub fn recipe(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Entry::Recipe(Recipe {
            name: name.into(),
            required_items,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Ingredient(_) => EntryKind::Ingredient,
            Entry::Recipe(_) => EntryKind::Recipe,
        }
    }

    pub fn is_ingredient(&self) -> bool {
        matches!(self, Entry::Ingredient(_))
    }
}
