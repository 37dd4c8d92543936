// src/catalog/summary.rs

//! Recipe summaries: the externally visible shape of a resolution

use super::entry::Entry;
use super::resolve::{ResolutionError, Resolver};
use super::store::EntryStore;
use serde::{Deserialize, Serialize};

/// One base ingredient and its total quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: i64,
}

/// A recipe flattened into base ingredients and total cook time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: i64,
    /// Ingredients in the order they were first reached
    pub ingredients: Vec<IngredientQuantity>,
}

/// Build the summary for the recipe registered under `name`
pub fn build_summary(store: &EntryStore, name: &str) -> Result<Summary, ResolutionError> {
    let entry = store
        .lookup(name)
        .ok_or_else(|| ResolutionError::NotFound(name.to_string()))?;

    if let Entry::Ingredient(_) = entry {
        return Err(ResolutionError::IsIngredient(name.to_string()));
    }

    let resolution = Resolver::new(store).resolve(entry, 1)?;

    Ok(Summary {
        name: name.to_string(),
        cook_time: resolution.cook_time,
        ingredients: resolution
            .ingredients
            .iter()
            .map(|(name, quantity)| IngredientQuantity {
                name: name.to_string(),
                quantity,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::RequiredItem;

    fn skibidi_store() -> EntryStore {
        let mut store = EntryStore::new();
        store.append(Entry::ingredient("Egg", 6));
        store.append(Entry::ingredient("Lettuce", 1));
        store.append(Entry::recipe("Meatball", vec![RequiredItem::new("Egg", 1)]));
        store.append(Entry::recipe(
            "Skibidi Spaghetti",
            vec![RequiredItem::new("Meatball", 3), RequiredItem::new("Lettuce", 2)],
        ));
        store
    }

    #[test]
    fn test_summary_of_nested_recipe() {
        let store = skibidi_store();
        let summary = build_summary(&store, "Skibidi Spaghetti").unwrap();
        assert_eq!(summary.name, "Skibidi Spaghetti");
        assert_eq!(summary.cook_time, 3 * 6 + 2);
        assert_eq!(
            summary.ingredients,
            vec![
                IngredientQuantity {
                    name: "Egg".to_string(),
                    quantity: 3,
                },
                IngredientQuantity {
                    name: "Lettuce".to_string(),
                    quantity: 2,
                },
            ]
        );
    }

    #[test]
    fn test_summary_not_found() {
        let store = skibidi_store();
        assert_eq!(
            build_summary(&store, "Rizz").unwrap_err(),
            ResolutionError::NotFound("Rizz".to_string())
        );
    }

    #[test]
    fn test_summary_of_ingredient() {
        let store = skibidi_store();
        let err = build_summary(&store, "Egg").unwrap_err();
        assert_eq!(err, ResolutionError::IsIngredient("Egg".to_string()));
        assert_eq!(err.to_string(), "Invalid Name: Name refers to an Ingredient");
    }

    #[test]
    fn test_summary_wire_format() {
        let store = skibidi_store();
        let summary = build_summary(&store, "Meatball").unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Meatball",
                "cookTime": 6,
                "ingredients": [{"name": "Egg", "quantity": 1}]
            })
        );
    }
}
