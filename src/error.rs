// src/error.rs

//! Crate-wide error type

use crate::catalog::{ResolutionError, SeedError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the cookbook library
#[derive(Error, Debug)]
pub enum Error {
    /// A creation request was rejected before touching the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A summary could not be produced for the queried name
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A seed file could not be loaded
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let err: Error = ValidationError::DuplicateName("Skibidi".to_string()).into();
        assert_eq!(err.to_string(), "Invalid Name: Name Already Exists");
    }

    #[test]
    fn test_missing_seed_file_is_a_seed_error() {
        let path = std::path::Path::new("/nonexistent.json");
        let err = crate::catalog::Cookbook::from_seed_file(path).unwrap_err();
        assert!(matches!(err, Error::Seed(SeedError::Read { .. })));
        assert!(err.to_string().contains("/nonexistent.json"));
    }
}
