//! Similarity Ranker - "you might also enjoy"
//!
//! Ranks every other film in the catalog by how close its summary is to the
//! query film's summary.
//!
//! ## Algorithm
//! 1. Count the query summary's words once
//! 2. Drop candidates sharing the query's name (ignoring case)
//! 3. Score each remaining summary with cosine similarity
//! 4. Stable sort descending, so equal scores keep catalog order
//! 5. Keep the top N

use crate::similarity::TermFrequency;
use catalog::{Catalog, Film};
use serde::Serialize;
use tracing::{debug, instrument};

/// Number of recommendations returned unless configured otherwise
pub const DEFAULT_TOP_N: usize = 3;

/// A candidate film paired with its similarity to the query
#[derive(Debug, Clone, Serialize)]
pub struct ScoredFilm<'a> {
    pub film: &'a Film,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct SimilarityRanker {
    top_n: usize,
}

impl SimilarityRanker {
    pub fn new() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Configure how many films `rank` returns (default: 3)
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank the catalog against `query`, best match first
    #[instrument(skip_all, fields(query = %query.name))]
    pub fn rank<'a>(&self, query: &Film, catalog: &'a Catalog) -> Vec<ScoredFilm<'a>> {
        let query_terms = TermFrequency::from_text(&query.summary);

        let mut scored: Vec<ScoredFilm<'a>> = catalog
            .iter()
            .filter(|candidate| !candidate.has_name(&query.name))
            .map(|candidate| ScoredFilm {
                film: candidate,
                score: query_terms.cosine(&TermFrequency::from_text(&candidate.summary)),
            })
            .collect();

        debug!("Scored {} candidates, keeping top {}", scored.len(), self.top_n());

        // sort_by is stable: ties stay in catalog order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.top_n);
        scored
    }
}

impl Default for SimilarityRanker {
    fn default() -> Self {
        Self::new()
    }
}
