//! Typed errors for catalog loading, zone lookup and configuration.
//!
//! Ranking, bundle and recommendation functions are infallible; these
//! errors only arise at the edges where data or settings enter the crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plant records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate plant id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneError {
    #[error("Invalid ZIP code format. Please provide a 5-digit US ZIP code.")]
    InvalidZip(String),

    #[error("invalid hardiness zone label '{0}'")]
    InvalidLabel(String),

    #[error("hardiness zone {0} is outside 1-13")]
    OutOfRange(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error(transparent)]
    Zone(#[from] ZoneError),
}
