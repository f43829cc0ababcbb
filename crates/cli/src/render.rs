//! Console rendering for dispatch outcomes.

use catalog::Genre;
use colored::Colorize;
use recommender::Outcome;
use std::fmt::{self, Write};

/// Write `outcome` as the text printed to stdout.
///
/// `input` is the line exactly as the user typed it.
pub fn write_outcome(
    out: &mut impl Write,
    outcome: &Outcome<'_>,
    input: &str,
    show_scores: bool,
) -> fmt::Result {
    match outcome {
        Outcome::GenreListing {
            genre,
            films,
            show_notes,
        } => {
            writeln!(out, "\n{}", genre_heading(genre, *show_notes).bold().blue())?;
            for film in films {
                if *show_notes {
                    writeln!(out, "\n👉 {}", film.name)?;
                    if let Some(note) = film.education_note() {
                        writeln!(out, "📚 {}", note)?;
                    }
                } else {
                    writeln!(out, "👉 {}", film.name)?;
                }
            }
        }
        Outcome::TitleMatches { films, .. } => {
            writeln!(out, "\n📽 You searched for: {}", input)?;
            writeln!(out, "{}", "🎬 Matching movies:".bold().blue())?;
            for film in films {
                writeln!(out, "👉 {}", film.name)?;
            }
        }
        Outcome::Similar { ranked, .. } => {
            if !ranked.is_empty() {
                writeln!(out, "\n{}", "📽 You might also enjoy:".bold().blue())?;
                for scored in ranked {
                    if show_scores {
                        let score = format!("({:.2})", scored.score);
                        writeln!(out, "👉 {} {}", scored.film.name, score.green())?;
                    } else {
                        writeln!(out, "👉 {}", scored.film.name)?;
                    }
                }
            }
        }
        Outcome::NotFound { .. } => {
            writeln!(out, "{}", "❌ Movie not found.".red())?;
        }
    }

    Ok(())
}

fn genre_heading(genre: &Genre, show_notes: bool) -> String {
    let label = match genre {
        Genre::Bollywood => "Bollywood".to_string(),
        Genre::Hollywood => "Hollywood".to_string(),
        other => capitalize(other.as_str()),
    };
    if show_notes {
        format!("🎬 Recommended {} Movies (Educational):", label)
    } else {
        format!("🎬 Recommended {} Movies:", label)
    }
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, Film};
    use recommender::Dispatcher;
    use std::sync::Arc;

    fn render(dispatcher: &Dispatcher, input: &str, show_scores: bool) -> String {
        colored::control::set_override(false);
        let mut text = String::new();
        write_outcome(&mut text, &dispatcher.dispatch(input), input, show_scores).unwrap();
        text
    }

    fn create_test_dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(Catalog::new(vec![
            Film::new("Dangal", "a father trains his daughters", "bollywood", ""),
            Film::new("Hichki", "a teacher turns weakness into strength", "bollywood", ""),
            Film::new(
                "Freedom Writers",
                "a teacher inspires students",
                "hollywood",
                "Storytelling matters.",
            ),
        ])))
    }

    #[test]
    fn test_render_bollywood() {
        let text = render(&create_test_dispatcher(), "Bollywood", false);
        assert_eq!(
            text,
            "\n🎬 Recommended Bollywood Movies:\n👉 Dangal\n👉 Hichki\n"
        );
    }

    #[test]
    fn test_render_hollywood_with_notes() {
        let text = render(&create_test_dispatcher(), "hollywood", false);
        assert_eq!(
            text,
            "\n🎬 Recommended Hollywood Movies (Educational):\n\n👉 Freedom Writers\n📚 Storytelling matters.\n"
        );
    }

    #[test]
    fn test_render_title_matches_echoes_input() {
        let text = render(&create_test_dispatcher(), "HI", false);
        assert_eq!(
            text,
            "\n📽 You searched for: HI\n🎬 Matching movies:\n👉 Hichki\n"
        );
    }

    #[test]
    fn test_render_similar_with_scores() {
        let text = render(&create_test_dispatcher(), "hichki", true);
        assert!(text.starts_with("\n📽 You might also enjoy:\n👉 Freedom Writers ("));
        assert_eq!(text.lines().filter(|l| l.starts_with("👉")).count(), 2);
    }

    #[test]
    fn test_render_not_found() {
        let text = render(&create_test_dispatcher(), "Titanic", false);
        assert_eq!(text, "❌ Movie not found.\n");
    }

    #[test]
    fn test_render_empty_ranking_prints_nothing() {
        let dispatcher = Dispatcher::new(Arc::new(Catalog::new(vec![Film::untagged(
            "Alone",
            "only film",
        )])));
        assert_eq!(render(&dispatcher, "alone", false), "");
    }

    #[test]
    fn test_other_genre_heading() {
        let heading = genre_heading(&Genre::Other("tollywood".to_string()), false);
        assert_eq!(heading, "🎬 Recommended Tollywood Movies:");
    }
}
