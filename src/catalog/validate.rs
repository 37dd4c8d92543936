// src/catalog/validate.rs

//! Validation of entry creation requests
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! 1. a recipe may not list the same required item twice
//! 2. an ingredient needs a cook time, and it may not be negative
//! 3. the entry type must be `recipe` or `ingredient`
//! 4. the name must not already exist in the store
//!
//! The order is observable. A recipe with duplicate required items reports
//! that even when its name is also taken.

use super::entry::{Entry, EntryKind, RequiredItem};
use super::store::EntryStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a creation request is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A recipe lists the same item name more than once
    #[error("Invalid Required Items: Duplicate Names in Required Items")]
    DuplicateRequiredItem(String),

    /// An ingredient was given a negative cook time
    #[error("Invalid Cook Time: Cook Time Less Than 0")]
    NegativeCookTime(i64),

    /// An ingredient was sent without any cook time
    #[error("Invalid Cook Time: Cook Time Is Required For Ingredients")]
    MissingCookTime,

    /// The entry type is neither `recipe` nor `ingredient`
    #[error("Invalid Type: Type Must Be Recipe or Ingredient")]
    UnknownEntryKind(String),

    /// The name is already used by another entry of either kind
    #[error("Invalid Name: Name Already Exists")]
    DuplicateName(String),
}

/// An entry creation request as received from a client or seed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    /// Raw entry type; checked after the structural rules
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    /// Only meaningful for recipes
    #[serde(default)]
    pub required_items: Vec<RequiredItem>,
    /// Only meaningful for ingredients
    #[serde(default)]
    pub cook_time: Option<i64>,
}

impl NewEntry {
    /// Build an ingredient request
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            kind: EntryKind::Ingredient.as_str().to_string(),
            name: name.into(),
            required_items: Vec::new(),
            cook_time: Some(cook_time),
        }
    }

    /// Build a recipe request
    pub fn recipe(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Self {
            kind: EntryKind::Recipe.as_str().to_string(),
            name: name.into(),
            required_items,
            cook_time: None,
        }
    }
}

/// Find the first item name that appears twice in a recipe's list
fn first_duplicate_item(items: &[RequiredItem]) -> Option<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .find(|item| !seen.insert(item.name.as_str()))
        .map(|item| item.name.as_str())
}

/// Validate a creation request against the store
///
/// On success returns the entry ready to be appended. The store itself is
/// never touched here.
pub fn validate_entry(request: NewEntry, store: &EntryStore) -> Result<Entry, ValidationError> {
    let is_recipe = request.kind == EntryKind::Recipe.as_str();
    let is_ingredient = request.kind == EntryKind::Ingredient.as_str();

    if is_recipe {
        if let Some(dup) = first_duplicate_item(&request.required_items) {
            return Err(ValidationError::DuplicateRequiredItem(dup.to_string()));
        }
    }

    if is_ingredient {
        match request.cook_time {
            None => return Err(ValidationError::MissingCookTime),
            Some(cook_time) if cook_time < 0 => {
                return Err(ValidationError::NegativeCookTime(cook_time));
            }
            Some(_) => {}
        }
    }

    let kind: EntryKind = request
        .kind
        .parse()
        .map_err(|_| ValidationError::UnknownEntryKind(request.kind.clone()))?;

    if store.contains(&request.name) {
        return Err(ValidationError::DuplicateName(request.name));
    }

    Ok(match kind {
        EntryKind::Recipe => Entry::recipe(request.name, request.required_items),
        EntryKind::Ingredient => Entry::ingredient(request.name, request.cook_time.unwrap_or(0)),
    })
}
