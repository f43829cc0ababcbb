//! # Catalog Crate
//!
//! Film catalog for the recommendation demo.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Film, Genre, Catalog)
//! - **builtin**: The catalog compiled into the binary
//! - **parser**: Parse `films.dat` files into a Catalog
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Genre};
//! use std::path::Path;
//!
//! let builtin = Catalog::builtin();
//! let custom = Catalog::load_from_file(Path::new("data/films.dat"))?;
//!
//! for film in builtin.by_genre(&Genre::Hollywood) {
//!     println!("{}: {}", film.name, film.education_note);
//! }
//! ```

// Public modules
pub mod builtin;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, Film, Genre};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_creation() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.find_exact("anything").is_none());
        assert!(catalog.by_genre(&Genre::Bollywood).is_empty());
    }

    #[test]
    fn test_collect_into_catalog() {
        let catalog: Catalog = vec![
            Film::untagged("One", "first film"),
            Film::untagged("Two", "second film"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.films()[1].name, "Two");
    }
}
