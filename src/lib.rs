// src/lib.rs

//! Cookbook
//!
//! An in-memory catalog of ingredients and recipes that flattens any recipe
//! into the total quantity of every base ingredient it needs and the total
//! cook time of those ingredients.
//!
//! # Architecture
//!
//! - Catalog: validated, immutable entries in one name-keyed store
//! - Resolution: depth-first expansion with a cycle guard and checked totals
//! - Names: normalization of handwritten recipe names
//! - Server: axum HTTP front end over a shared, lock-guarded cookbook

pub mod catalog;
mod error;
pub mod name;

#[cfg(feature = "server")]
pub mod server;

pub use catalog::{Cookbook, Entry, EntryKind, NewEntry, RequiredItem, Summary};
pub use error::{Error, Result};
