mod render;

use anyhow::{Context, Result};
use catalog::Catalog;
use clap::Parser;
use recommender::{DEFAULT_TOP_N, Dispatcher};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use render::write_outcome;

const PROMPT: &str = "🎬 Enter a movie name or genre (e.g., Bollywood, Hollywood): ";

/// FilmRecs - Movie Recommendation Demo
#[derive(Parser)]
#[command(name = "film-recs")]
#[command(about = "Recommend films by genre, title search or summary similarity", long_about = None)]
struct Cli {
    /// Movie name or genre keyword (prompts on stdin when omitted)
    query: Option<String>,

    /// Path to a films.dat catalog (uses the built-in catalog when omitted)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Number of similar films to recommend
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    limit: usize,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Show similarity scores next to recommendations
    #[arg(long)]
    scores: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let catalog = Arc::new(load_catalog(cli.catalog.as_deref())?);
    info!("Catalog ready with {} films", catalog.len());

    let dispatcher = Dispatcher::new(catalog).with_limit(cli.limit);

    let input = match cli.query {
        Some(query) => query,
        None => prompt_for_query().context("Failed to read query from stdin")?,
    };
    debug!("Dispatching query {:?}", input);

    let outcome = dispatcher.dispatch(&input);

    if cli.json {
        let json = serde_json::to_string_pretty(&outcome).context("Failed to encode result")?;
        println!("{}", json);
    } else {
        let mut text = String::new();
        write_outcome(&mut text, &outcome, &input, cli.scores).context("Failed to render result")?;
        print!("{}", text);
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries results
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

/// Prompt once on stdout and read a single line from stdin
fn prompt_for_query() -> Result<String> {
    read_query(io::stdin().lock(), io::stdout())
}

/// Write the prompt to `writer` and read one line from `reader`.
///
/// Only the line terminator is removed; EOF yields an empty query.
fn read_query(mut reader: impl BufRead, mut writer: impl Write) -> Result<String> {
    write!(writer, "{}", PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}
