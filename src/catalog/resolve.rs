// src/catalog/resolve.rs

//! Recipe resolution: flattening a recipe into base ingredients
//!
//! Resolution is linear in the multiplier, so every recipe is expanded once
//! per call at multiplier 1 and the result is scaled by each quantity that
//! requires it. A recipe shared by several branches (a diamond) is therefore
//! expanded a single time and reused.
//!
//! Expansion walks the requirement graph depth-first in declared order with an
//! explicit work stack, so chains of any depth resolve without growing the
//! thread's stack.
//!
//! # Circular Requirements
//!
//! Nothing stops a recipe from requiring itself, directly or through other
//! recipes, since items are not checked at creation time. The work stack holds
//! the chain of recipes currently being expanded, and a recipe that re-enters
//! that chain fails with [`ResolutionError::CycleDetected`].

use super::entry::{Entry, EntryKind, Ingredient, Recipe};
use super::store::EntryStore;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Reasons a summary or resolution cannot be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// No entry is registered under the queried name
    #[error("Invalid Name: No Entry With Name {0}")]
    NotFound(String),

    /// Summaries are only defined for recipes
    #[error("Invalid Name: Name refers to an Ingredient")]
    IsIngredient(String),

    /// A recipe requires an item that is not in the cookbook
    #[error("Invalid Required Item: {recipe} requires {item}, which is not in the cookbook")]
    UnresolvedReference { recipe: String, item: String },

    /// An ingredient's name now resolves to something else
    #[error("Invalid Type: Expected Type Ingredient but got {found} for {name}")]
    ExpectedIngredient { name: String, found: EntryKind },

    /// A recipe requires itself, directly or indirectly
    #[error("Invalid Recipe: Circular Requirement {}", .chain.join(" -> "))]
    CycleDetected { chain: Vec<String> },

    /// Scaled quantities or cook times do not fit in an i64
    #[error("Invalid Recipe: Totals For {name} Are Too Large")]
    Overflow { name: String },
}

fn overflow(name: &str) -> ResolutionError {
    ResolutionError::Overflow {
        name: name.to_string(),
    }
}

/// Ingredient counts, kept in the order ingredients were first reached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientCounts {
    counts: Vec<(String, i64)>,
    /// Key: ingredient name, Value: position in `counts`
    index: HashMap<String, usize>,
}

impl IngredientCounts {
    pub fn new() -> Self {
        Self::default()
    }

    fn single(name: &str, quantity: i64) -> Self {
        let mut counts = Self::new();
        counts.index.insert(name.to_string(), 0);
        counts.counts.push((name.to_string(), quantity));
        counts
    }

    /// Get the count for an ingredient
    pub fn get(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&pos| self.counts[pos].1)
    }

    /// Iterate over `(name, quantity)` pairs in first-reached order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Add another set of counts into this one
    fn merge(&mut self, other: IngredientCounts) -> Result<(), ResolutionError> {
        for (name, qty) in other.counts {
            match self.index.get(&name) {
                Some(&pos) => {
                    let slot = &mut self.counts[pos].1;
                    *slot = slot.checked_add(qty).ok_or_else(|| overflow(&name))?;
                }
                None => {
                    self.index.insert(name.clone(), self.counts.len());
                    self.counts.push((name, qty));
                }
            }
        }
        Ok(())
    }

    /// Multiply every count by `multiplier`
    fn scale(&mut self, multiplier: i64) -> Result<(), ResolutionError> {
        for (name, qty) in &mut self.counts {
            *qty = qty.checked_mul(multiplier).ok_or_else(|| overflow(name))?;
        }
        Ok(())
    }
}

/// Result of resolving an entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Total cook time of every base ingredient, already scaled
    pub cook_time: i64,
    pub ingredients: IngredientCounts,
}

impl Resolution {
    /// One unit of a base ingredient
    fn unit(ingredient: &Ingredient) -> Self {
        Self {
            cook_time: ingredient.cook_time,
            ingredients: IngredientCounts::single(&ingredient.name, 1),
        }
    }

    /// Scale by `multiplier`; `name` is the entry being scaled
    fn scaled(mut self, multiplier: i64, name: &str) -> Result<Self, ResolutionError> {
        self.cook_time = self
            .cook_time
            .checked_mul(multiplier)
            .ok_or_else(|| overflow(name))?;
        self.ingredients.scale(multiplier)?;
        Ok(self)
    }

    /// Add a child's totals; `name` is the recipe accumulating them
    fn absorb(&mut self, child: Resolution, name: &str) -> Result<(), ResolutionError> {
        self.cook_time = self
            .cook_time
            .checked_add(child.cook_time)
            .ok_or_else(|| overflow(name))?;
        self.ingredients.merge(child.ingredients)
    }
}

/// A recipe on the work stack, partway through its required items
struct Frame<'a> {
    recipe: &'a Recipe,
    /// Quantity the parent requires of this recipe
    quantity: i64,
    /// Index of the next required item to visit
    next: usize,
    totals: Resolution,
}

impl<'a> Frame<'a> {
    fn new(recipe: &'a Recipe, quantity: i64) -> Self {
        Self {
            recipe,
            quantity,
            next: 0,
            totals: Resolution::default(),
        }
    }
}

/// Depth-first recipe expander over a borrowed store
pub struct Resolver<'a> {
    store: &'a EntryStore,
    /// Unit resolutions of recipes already fully expanded
    resolved: HashMap<&'a str, Resolution>,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a EntryStore) -> Self {
        Self {
            store,
            resolved: HashMap::new(),
        }
    }

    /// Resolve an entry into base ingredients, scaled by `multiplier`
    pub fn resolve(
        &mut self,
        entry: &'a Entry,
        multiplier: i64,
    ) -> Result<Resolution, ResolutionError> {
        let unit = match entry {
            Entry::Ingredient(ingredient) => self.resolve_ingredient(ingredient)?,
            Entry::Recipe(recipe) => self.resolve_recipe(recipe)?,
        };
        unit.scaled(multiplier, entry.name())
    }

    fn resolve_ingredient(&self, ingredient: &Ingredient) -> Result<Resolution, ResolutionError> {
        // Re-read from the store so the cook time always comes from the
        // registered entry, and catch a name that changed kind.
        match self.store.lookup(&ingredient.name) {
            Some(Entry::Ingredient(stored)) => Ok(Resolution::unit(stored)),
            Some(other) => Err(ResolutionError::ExpectedIngredient {
                name: ingredient.name.clone(),
                found: other.kind(),
            }),
            None => Err(ResolutionError::NotFound(ingredient.name.clone())),
        }
    }

    /// Expand `root` at multiplier 1
    fn resolve_recipe(&mut self, root: &'a Recipe) -> Result<Resolution, ResolutionError> {
        if let Some(done) = self.resolved.get(root.name.as_str()) {
            return Ok(done.clone());
        }

        let mut stack = vec![Frame::new(root, 1)];
        let mut expanding: HashSet<&'a str> = HashSet::from([root.name.as_str()]);

        while let Some(mut frame) = stack.pop() {
            let recipe = frame.recipe;

            if let Some(item) = recipe.required_items.get(frame.next) {
                frame.next += 1;

                let child = self.store.lookup(&item.name).ok_or_else(|| {
                    ResolutionError::UnresolvedReference {
                        recipe: recipe.name.clone(),
                        item: item.name.clone(),
                    }
                })?;

                match child {
                    Entry::Ingredient(ingredient) => {
                        let scaled =
                            Resolution::unit(ingredient).scaled(item.quantity, &item.name)?;
                        frame.totals.absorb(scaled, &recipe.name)?;
                        stack.push(frame);
                    }
                    Entry::Recipe(sub) => {
                        if let Some(done) = self.resolved.get(sub.name.as_str()) {
                            let scaled = done.clone().scaled(item.quantity, &item.name)?;
                            frame.totals.absorb(scaled, &recipe.name)?;
                            stack.push(frame);
                        } else if expanding.contains(sub.name.as_str()) {
                            stack.push(frame);
                            return Err(cycle_error(&stack, &sub.name));
                        } else {
                            expanding.insert(&sub.name);
                            stack.push(frame);
                            stack.push(Frame::new(sub, item.quantity));
                        }
                    }
                }
                continue;
            }

            // Every required item has been absorbed
            expanding.remove(recipe.name.as_str());
            self.resolved.insert(&recipe.name, frame.totals.clone());

            match stack.last_mut() {
                Some(parent) => {
                    let scaled = frame.totals.scaled(frame.quantity, &recipe.name)?;
                    parent.totals.absorb(scaled, &parent.recipe.name)?;
                }
                None => return Ok(frame.totals),
            }
        }

        // The root frame is the last one popped and returns above
        Ok(Resolution::default())
    }
}

/// Build the cycle error for `name` re-entering the work stack
fn cycle_error(stack: &[Frame<'_>], name: &str) -> ResolutionError {
    let start = stack
        .iter()
        .position(|frame| frame.recipe.name == name)
        .unwrap_or(0);
    let mut chain: Vec<String> = stack[start..]
        .iter()
        .map(|frame| frame.recipe.name.clone())
        .collect();
    chain.push(name.to_string());
    ResolutionError::CycleDetected { chain }
}

/// Resolve `entry` against `store` with a fresh resolver
pub fn resolve<'a>(
    store: &'a EntryStore,
    entry: &'a Entry,
    multiplier: i64,
) -> Result<Resolution, ResolutionError> {
    Resolver::new(store).resolve(entry, multiplier)
}
