//! Parser for `films.dat` catalog files.
//!
//! One film per line:
//! - `name::summary::genre::education_note`
//! - `genre` and `education_note` may be omitted (`name::summary`)
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Film};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

const FIELD_SEPARATOR: &str = "::";
const MAX_FIELDS: usize = 4;

impl Catalog {
    /// Load a catalog from a `films.dat` file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let films = parse_films(path)?;
        debug!("Loaded {} films from {}", films.len(), path.display());
        Ok(Catalog::new(films))
    }
}

/// Read and parse a `films.dat` file
pub fn parse_films(path: &Path) -> Result<Vec<Film>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_films_str(&content, &file)
}

/// Parse catalog content already held in memory.
///
/// `file` is only used to label errors.
pub fn parse_films_str(content: &str, file: &str) -> Result<Vec<Film>> {
    let mut films = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let film = parse_film_line(line_trimmed, file, line_no)?;

        if !seen.insert(film.name.to_lowercase()) {
            return Err(CatalogError::DuplicateFilm {
                name: film.name,
                line: line_no,
            });
        }
        films.push(film);
    }

    if films.is_empty() {
        return Err(CatalogError::EmptyCatalog {
            file: file.to_string(),
        });
    }

    Ok(films)
}

fn parse_film_line(line: &str, file: &str, line_no: usize) -> Result<Film> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

    if parts.len() > MAX_FIELDS {
        return Err(CatalogError::FieldCountMismatch {
            expected: MAX_FIELDS,
            found: parts.len(),
            line: line_no,
        });
    }

    let parse_error = |reason: &str| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: reason.to_string(),
    };

    let name = parts[0];
    if name.is_empty() {
        return Err(parse_error("Missing name"));
    }

    let summary = match parts.get(1) {
        Some(s) if !s.is_empty() => *s,
        _ => return Err(parse_error("Missing summary")),
    };

    let genre = parts.get(2).copied().unwrap_or("general");
    let note = parts.get(3).copied().unwrap_or("");

    Ok(Film::new(name, summary, genre, note))
}
