//! Routes one line of user input to a recommendation mode.
//!
//! Checks run in a fixed order and the first hit wins:
//! 1. input mentions "bollywood" -> every Bollywood film
//! 2. input mentions "hollywood" -> every Hollywood film, with notes
//! 3. titles containing the input -> those titles, in catalog order
//! 4. input equals a title -> similar films by summary
//! 5. nothing matched -> not found
//!
//! Blank input is not found. A title always contains itself, so step 3 only
//! fires when some title contains the input without being equal to it; it
//! then lists every containing title, the equal one included. A lone exact
//! match falls through to step 4.

use crate::ranker::{ScoredFilm, SimilarityRanker};
use catalog::{Catalog, Film, Genre};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Result of dispatching one query
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome<'a> {
    /// Every film in a genre collection
    GenreListing {
        genre: Genre,
        films: Vec<&'a Film>,
        /// Whether each entry should be shown with its education note
        show_notes: bool,
    },
    /// Films whose title contains the query
    TitleMatches { query: String, films: Vec<&'a Film> },
    /// Films ranked by similarity to an exactly named film
    Similar {
        film: &'a Film,
        ranked: Vec<ScoredFilm<'a>>,
    },
    NotFound { query: String },
}

impl Outcome<'_> {
    /// Film names in display order
    pub fn names(&self) -> Vec<&str> {
        match self {
            Outcome::GenreListing { films, .. } | Outcome::TitleMatches { films, .. } => {
                films.iter().map(|f| f.name.as_str()).collect()
            }
            Outcome::Similar { ranked, .. } => {
                ranked.iter().map(|s| s.film.name.as_str()).collect()
            }
            Outcome::NotFound { .. } => Vec::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound { .. })
    }
}

/// Genre keywords in the order they are checked, with whether notes are shown
const GENRE_KEYWORDS: [(&str, Genre, bool); 2] = [
    ("bollywood", Genre::Bollywood, false),
    ("hollywood", Genre::Hollywood, true),
];

/// Stateless query router over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    catalog: Arc<Catalog>,
    ranker: SimilarityRanker,
}

impl Dispatcher {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            ranker: SimilarityRanker::new(),
        }
    }

    /// Configure how many similar films are returned (default: 3)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.ranker = self.ranker.with_top_n(limit);
        self
    }

    /// Route `input` and compute the matching films
    pub fn dispatch(&self, input: &str) -> Outcome<'_> {
        let query = input.to_lowercase();

        if query.trim().is_empty() {
            debug!("Blank query");
            return Outcome::NotFound {
                query: input.to_string(),
            };
        }

        for (keyword, genre, show_notes) in &GENRE_KEYWORDS {
            if query.contains(*keyword) {
                let films = self.catalog.by_genre(genre);
                debug!("Genre keyword '{}' matched {} films", keyword, films.len());
                return Outcome::GenreListing {
                    genre: genre.clone(),
                    films,
                    show_notes: *show_notes,
                };
            }
        }

        let matches: Vec<&Film> = self.catalog.matching_title(&query);
        if matches.iter().any(|f| !f.has_name(&query)) {
            debug!("Title fragment matched {} films", matches.len());
            return Outcome::TitleMatches {
                query: input.to_string(),
                films: matches,
            };
        }

        if let Some(film) = self.catalog.find_exact(&query) {
            debug!("Exact title match: {}", film.name);
            let ranked = self.ranker.rank(film, &self.catalog);
            return Outcome::Similar { film, ranked };
        }

        debug!("No match for query");
        Outcome::NotFound {
            query: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(Catalog::new(vec![
            Film::new("Dangal", "a father trains his daughters", "bollywood", ""),
            Film::new(
                "Hidden Figures",
                "women mathematicians at nasa",
                "hollywood",
                "Math and perseverance.",
            ),
        ])))
    }

    #[test]
    fn test_bollywood_keyword() {
        let dispatcher = create_test_dispatcher();
        match dispatcher.dispatch("Show me BOLLYWOOD films") {
            Outcome::GenreListing { genre, films, show_notes } => {
                assert_eq!(genre, Genre::Bollywood);
                assert_eq!(films.len(), 1);
                assert_eq!(films[0].name, "Dangal");
                assert!(!show_notes);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_hollywood_keyword_shows_notes() {
        let dispatcher = create_test_dispatcher();
        match dispatcher.dispatch("hollywood") {
            Outcome::GenreListing { films, show_notes, .. } => {
                assert_eq!(films.len(), 1);
                assert_eq!(films[0].education_note, "Math and perseverance.");
                assert!(show_notes);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_bollywood_checked_before_hollywood() {
        let dispatcher = create_test_dispatcher();
        let outcome = dispatcher.dispatch("hollywood or bollywood?");
        assert_eq!(outcome.names(), vec!["Dangal"]);
    }

    #[test]
    fn test_blank_input_not_found() {
        let dispatcher = create_test_dispatcher();
        assert!(dispatcher.dispatch("").is_not_found());
        assert!(dispatcher.dispatch("   \t").is_not_found());
    }

    #[test]
    fn test_unknown_input_not_found() {
        let dispatcher = create_test_dispatcher();
        match dispatcher.dispatch("Titanic") {
            Outcome::NotFound { query } => assert_eq!(query, "Titanic"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_exact_title_ranks_others() {
        let dispatcher = create_test_dispatcher();
        match dispatcher.dispatch("dangal") {
            Outcome::Similar { film, ranked } => {
                assert_eq!(film.name, "Dangal");
                assert_eq!(ranked.len(), 1);
                assert_eq!(ranked[0].film.name, "Hidden Figures");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_limit_applies_to_ranking() {
        let dispatcher = create_test_dispatcher().with_limit(0);
        match dispatcher.dispatch("Dangal") {
            Outcome::Similar { ranked, .. } => assert!(ranked.is_empty()),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_title_matches_include_exact_title() {
        let dispatcher = Dispatcher::new(Arc::new(Catalog::new(vec![
            Film::untagged("Hidden", "a quiet story"),
            Film::untagged("Hidden Figures", "a loud story"),
        ])));
        match dispatcher.dispatch("hidden") {
            Outcome::TitleMatches { films, .. } => {
                let names: Vec<&str> = films.iter().map(|f| f.name.as_str()).collect();
                assert_eq!(names, vec!["Hidden", "Hidden Figures"]);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_outcome_serializes_with_kind_tag() {
        let dispatcher = create_test_dispatcher();
        let json = serde_json::to_value(dispatcher.dispatch("figures")).unwrap();
        assert_eq!(json["kind"], "title_matches");
        assert_eq!(json["query"], "figures");
        assert_eq!(json["films"][0]["name"], "Hidden Figures");
        assert_eq!(json["films"][0]["genre"], "hollywood");
    }
}
