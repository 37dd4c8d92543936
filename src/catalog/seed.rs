// src/catalog/seed.rs

//! Seed files: a JSON array of creation requests loaded at startup
//!
//! ```json
//! [
//!   { "type": "ingredient", "name": "Egg", "cookTime": 6 },
//!   { "type": "recipe", "name": "Omelette", "requiredItems": [{ "name": "Egg", "quantity": 2 }] }
//! ]
//! ```
//!
//! Each request goes through the same validation as `POST /entry`, in file
//! order. Nothing is ever written back.

use super::validate::{NewEntry, ValidationError};
use super::Cookbook;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a seed file
#[derive(Error, Debug)]
pub enum SeedError {
    /// Seed file could not be read
    #[error("Failed to read seed file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Seed file is not a JSON array of entries
    #[error("Failed to parse seed file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// An entry in the seed file failed validation
    #[error("Seed entry #{position} ('{name}') rejected: {source}")]
    Rejected {
        position: usize,
        name: String,
        source: ValidationError,
    },
}

/// Parse seed content into creation requests
pub fn parse_seed(content: &str, path: &Path) -> Result<Vec<NewEntry>, SeedError> {
    serde_json::from_str(content).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read creation requests from a seed file
pub fn read_seed_file(path: &Path) -> Result<Vec<NewEntry>, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&content, path)
}

/// Add every request to the cookbook, stopping at the first rejection
///
/// Entries added before the rejected one stay in the cookbook.
pub fn apply_seed(cookbook: &mut Cookbook, requests: Vec<NewEntry>) -> Result<usize, SeedError> {
    let mut added = 0;
    for (position, request) in requests.into_iter().enumerate() {
        let name = request.name.clone();
        cookbook
            .add_entry(request)
            .map_err(|source| SeedError::Rejected {
                position,
                name,
                source,
            })?;
        added += 1;
    }
    Ok(added)
}
