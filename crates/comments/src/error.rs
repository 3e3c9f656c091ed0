//! Error types for the comments crate.
//!
//! Only document-level failures are errors here. A single bad comment
//! inside a valid document is never an error: it is skipped or decoded
//! with the offending field left empty.

use thiserror::Error;

/// Errors that can occur while loading a comment dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid JSON
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The document is valid JSON but the top level is not an array
    #[error("Expected a JSON array of comments but found {found}")]
    NotAnArray { found: String },
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, LoadError>;
