//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while building or loading a film catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A line carried more fields than a film record has
    #[error("Expected at most {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two films share a name (compared case-insensitively)
    #[error("Duplicate film '{name}' at line {line}")]
    DuplicateFilm { name: String, line: usize },

    /// The catalog file held no films at all
    #[error("Catalog {file} contains no films")]
    EmptyCatalog { file: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
