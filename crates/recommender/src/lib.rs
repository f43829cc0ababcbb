//! # Recommender Crate
//!
//! Turns a line of user input into film recommendations.
//!
//! ## Components
//!
//! ### Similarity
//! Term-frequency cosine similarity between two summaries.
//!
//! ### Similarity Ranker
//! "You might also enjoy": ranks the rest of the catalog against one film
//! and keeps the top 3.
//!
//! ### Dispatcher
//! Decides between genre listing, title search and similarity ranking,
//! returning a structured `Outcome`. No I/O happens here.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use recommender::{Dispatcher, Outcome};
//! use std::sync::Arc;
//!
//! let dispatcher = Dispatcher::new(Arc::new(Catalog::builtin()));
//!
//! match dispatcher.dispatch("Dangal") {
//!     Outcome::Similar { ranked, .. } => {
//!         for scored in ranked {
//!             println!("{} ({:.2})", scored.film.name, scored.score);
//!         }
//!     }
//!     other => println!("{:?}", other.names()),
//! }
//! ```

// Public modules
pub mod dispatcher;
pub mod ranker;
pub mod similarity;

// Re-export commonly used types
pub use dispatcher::{Dispatcher, Outcome};
pub use ranker::{DEFAULT_TOP_N, ScoredFilm, SimilarityRanker};
pub use similarity::{TermFrequency, similarity};
