//! Core domain types for the film catalog.
//!
//! - `Film`: a single catalog entry with normalized text fields
//! - `Genre`: lowercase genre tag, with the two curated collections as variants
//! - `Catalog`: the ordered, read-only list of films

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Genre
// =============================================================================

/// Genre tag attached to every film.
///
/// Tags are case-insensitive on input and always displayed lowercase.
/// Anything that is not one of the known collections is kept verbatim
/// (lowercased) in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Bollywood,
    Hollywood,
    /// Default for films constructed without a genre
    General,
    Other(String),
}

impl Genre {
    /// Lowercase tag for this genre
    pub fn as_str(&self) -> &str {
        match self {
            Genre::Bollywood => "bollywood",
            Genre::Hollywood => "hollywood",
            Genre::General => "general",
            Genre::Other(tag) => tag,
        }
    }
}

impl From<&str> for Genre {
    fn from(s: &str) -> Self {
        let tag = s.trim().to_lowercase();
        match tag.as_str() {
            "bollywood" => Genre::Bollywood,
            "hollywood" => Genre::Hollywood,
            "general" | "" => Genre::General,
            _ => Genre::Other(tag),
        }
    }
}

impl From<String> for Genre {
    fn from(s: String) -> Self {
        Genre::from(s.as_str())
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.as_str().to_string()
    }
}

impl FromStr for Genre {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Genre::from(s))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Film
// =============================================================================

/// A film in the catalog.
///
/// Construct through `Film::new` or `Film::untagged` so the text fields are
/// normalized: `summary` lowercase, `genre` lowercase, `education_note`
/// trimmed. `name` is kept as given since it is the display identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Film {
    pub name: String,
    pub summary: String,
    pub genre: Genre,
    /// Empty when the film carries no note
    pub education_note: String,
}

impl Film {
    pub fn new(
        name: impl Into<String>,
        summary: &str,
        genre: &str,
        education_note: &str,
    ) -> Self {
        Self {
            name: name.into(),
            summary: summary.to_lowercase(),
            genre: Genre::from(genre),
            education_note: education_note.trim().to_string(),
        }
    }

    /// A film with the `general` genre and no education note
    pub fn untagged(name: impl Into<String>, summary: &str) -> Self {
        Self::new(name, summary, "general", "")
    }

    /// Case-insensitive exact name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring test against the film's name
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }

    pub fn education_note(&self) -> Option<&str> {
        if self.education_note.is_empty() {
            None
        } else {
            Some(&self.education_note)
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, immutable list of films.
///
/// Built once at startup and shared read-only (usually behind an `Arc`).
/// Every query preserves catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    films: Vec<Film>,
}

impl Catalog {
    pub fn new(films: Vec<Film>) -> Self {
        Self { films }
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Film> {
        self.films.iter()
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// All films tagged with `genre`, in catalog order
    pub fn by_genre(&self, genre: &Genre) -> Vec<&Film> {
        self.films.iter().filter(|f| &f.genre == genre).collect()
    }

    /// First film whose name equals `name`, ignoring case
    pub fn find_exact(&self, name: &str) -> Option<&Film> {
        self.films.iter().find(|f| f.has_name(name))
    }

    /// All films whose name contains `fragment`, ignoring case, in catalog order
    pub fn matching_title(&self, fragment: &str) -> Vec<&Film> {
        self.films
            .iter()
            .filter(|f| f.name_contains(fragment))
            .collect()
    }
}

impl FromIterator<Film> for Catalog {
    fn from_iter<I: IntoIterator<Item = Film>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Film;
    type IntoIter = std::slice::Iter<'a, Film>;

    fn into_iter(self) -> Self::IntoIter {
        self.films.iter()
    }
}
