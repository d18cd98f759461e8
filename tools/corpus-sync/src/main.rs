//! Corpus Sync Tool
//!
//! Builds the CSV corpora the trainer learns from: genuine titles and
//! publishers from Open Library, template-generated fake titles, and the
//! merged `Title;Label` dataset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use titlecheck_core::{write_labeled_titles, write_publishers, write_records};
use titlecheck_corpus::{
    fetch_all_publishers, fetch_all_titles, merge_corpora, FakeTitleGenerator, FetchConfig,
    OpenLibraryClient, DEFAULT_BASE_URL,
};
use tracing::info;

/// CLI arguments
#[derive(Parser)]
#[command(name = "corpus-sync")]
#[command(about = "Fetch, generate and merge book title corpora")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Open Library search endpoint
    #[arg(short = 'u', long, env = "TITLECHECK_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Language filter for catalogue queries
    #[arg(short, long, default_value = "eng")]
    language: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch genuine titles per genre
    Titles {
        #[arg(short, long, default_value = "real_book_titles.csv")]
        output: PathBuf,
        /// Stop a genre once this many titles are collected
        #[arg(short, long, default_value_t = 2000)]
        target: usize,
        /// Documents requested per page
        #[arg(short, long, default_value_t = 100)]
        page_size: u32,
        /// Genre to query (repeatable; defaults to the built-in list)
        #[arg(short, long = "genre")]
        genres: Vec<String>,
    },
    /// Fetch the distinct publishers per genre
    Publishers {
        #[arg(short, long, default_value = "publishers.csv")]
        output: PathBuf,
        #[arg(short, long, default_value_t = 35)]
        target: usize,
        #[arg(short, long, default_value_t = 35)]
        page_size: u32,
        #[arg(short, long = "genre")]
        genres: Vec<String>,
    },
    /// Generate synthetic titles
    Fake {
        #[arg(short, long, default_value = "fake_book_titles.csv")]
        output: PathBuf,
        #[arg(short, long, default_value_t = 10_000)]
        count: usize,
        /// Seed for reproducible output; omitted means a different corpus every run
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Combine corpora into one Title;Label file
    Merge {
        /// Input corpora, read in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[arg(short, long, default_value = "dataset.csv")]
        output: PathBuf,
        /// Shuffle the merged rows with this seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn fetch_config(&self, target: usize, page_size: u32, genres: &[String]) -> FetchConfig {
        let mut config = FetchConfig::new()
            .with_base_url(&self.api_url)
            .with_language(&self.language)
            .with_target(target)
            .with_page_size(page_size);
        if !genres.is_empty() {
            config = config.with_genres(genres.iter().cloned());
        }
        config
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Titles {
            output,
            target,
            page_size,
            genres,
        } => {
            let config = cli.fetch_config(*target, *page_size, genres);
            let client = OpenLibraryClient::new(&config.base_url);
            info!(genres = ?config.genres, per_genre = *target, "Fetching titles...");

            let records = fetch_all_titles(&client, &config)?;
            ensure_parent(output)?;
            write_records(output, &records)?;
            info!(rows = records.len(), path = %output.display(), "Titles written");
        }
        Commands::Publishers {
            output,
            target,
            page_size,
            genres,
        } => {
            let config = cli.fetch_config(*target, *page_size, genres);
            let client = OpenLibraryClient::new(&config.base_url);
            info!(genres = ?config.genres, per_genre = *target, "Fetching publishers...");

            let publishers = fetch_all_publishers(&client, &config)?;
            ensure_parent(output)?;
            write_publishers(output, &publishers)?;
            info!(rows = publishers.len(), path = %output.display(), "Publishers written");
        }
        Commands::Fake {
            output,
            count,
            seed,
        } => {
            let mut generator = match seed {
                Some(seed) => FakeTitleGenerator::with_seed(*seed),
                None => FakeTitleGenerator::from_entropy(),
            };
            let rows = generator.generate_labeled(*count);
            ensure_parent(output)?;
            write_labeled_titles(output, &rows)?;
            info!(rows = rows.len(), path = %output.display(), "Fake titles written");
        }
        Commands::Merge {
            inputs,
            output,
            seed,
        } => {
            let rows = merge_corpora(inputs.as_slice(), *seed)?;
            ensure_parent(output)?;
            write_labeled_titles(output, &rows)?;
            info!(inputs = inputs.len(), rows = rows.len(), path = %output.display(), "Dataset written");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    run(Cli::parse())
}
