use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use lyricbench::config::{Config, StylometryProfile};
use lyricbench::corpus::{self, Corpus};
use lyricbench::features::extract::StylometricExtractor;
use lyricbench::features::traits::FeatureExtractor;
use lyricbench::output::{csv, report, terminal};
use lyricbench::pipeline::analysis;
use lyricbench::scoring::benchmark::BenchmarkModel;

/// Lyricbench: how much do these lyrics read like past winners?
///
/// Scores candidate song lyrics against a benchmark corpus of winning lyrics
/// using four stylometric features: lexical diversity, word repetition,
/// thematic vocabulary and refrain structure.
#[derive(Parser)]
#[command(name = "lyricbench", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidate lyrics by similarity to the winners
    Rank {
        /// Winners corpus: JSON object or directory of .txt files
        #[arg(long)]
        winners: Option<PathBuf>,

        /// Candidates corpus: JSON object or directory of .txt files
        #[arg(long)]
        candidates: Option<PathBuf>,

        /// Alternate stylometry profile (JSON)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: Format,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the feature vector of every text in a corpus
    Features {
        /// Corpus: JSON object or directory of .txt files
        path: PathBuf,

        /// Alternate stylometry profile (JSON)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Show the benchmark statistics built from the winners
    Benchmark {
        /// Winners corpus: JSON object or directory of .txt files
        #[arg(long)]
        winners: Option<PathBuf>,

        /// Alternate stylometry profile (JSON)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Print the default stylometry profile as JSON
    Profile,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum Format {
    /// `artist,score` rows
    Csv,
    /// CSV followed by the per-artist feature breakdown
    Details,
    /// Colored terminal table
    Table,
    /// Benchmark and ranking as JSON
    Json,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so CSV on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lyricbench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            winners,
            candidates,
            profile,
            format,
            output,
        } => {
            let config = Config::load()?.with_overrides(winners, candidates, profile);
            let (winners_path, candidates_path) = config.require_corpora()?;
            let profile = config.profile()?;

            let winners = load_nonempty(winners_path, "winners")?;
            let candidates = corpus::load_corpus(candidates_path)?;

            let result = analysis::run(&winners, &candidates, &profile);

            let rendered = match format {
                Format::Csv => csv::render_ranking(&result.ranked),
                Format::Details => format!(
                    "{}\n{}",
                    csv::render_ranking(&result.ranked),
                    report::render_details(&result.ranked)
                ),
                Format::Json => format!("{}\n", serde_json::to_string_pretty(&result)?),
                Format::Table => {
                    if output.is_some() {
                        anyhow::bail!("--format table is terminal-only; use csv, details or json with --output");
                    }
                    terminal::display_benchmark(&result.benchmark);
                    terminal::display_ranking(&result.ranked);
                    return Ok(());
                }
            };

            emit(&rendered, output.as_deref())?;
        }

        Commands::Features { path, profile } => {
            let config = Config::load()?.with_overrides(None, None, profile);
            let profile = config.profile()?;
            let texts = corpus::load_corpus(&path)?;

            let extractor = StylometricExtractor::new(&profile);
            let rows: Vec<(String, _)> = texts
                .iter()
                .map(|(id, text)| (id.to_string(), extractor.extract(text)))
                .collect();

            terminal::display_features(&rows);
        }

        Commands::Benchmark { winners, profile } => {
            let config = Config::load()?.with_overrides(winners, None, profile);
            let winners_path = config.require_winners()?;
            let profile = config.profile()?;
            let winners = load_nonempty(winners_path, "winners")?;

            let extractor = StylometricExtractor::new(&profile);
            let model = BenchmarkModel::build(&winners, &extractor, &profile);
            terminal::display_benchmark(&model);
        }

        Commands::Profile => {
            let json = serde_json::to_string_pretty(&StylometryProfile::default())?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Load a corpus that must contain at least one text.
fn load_nonempty(path: &Path, what: &str) -> Result<Corpus> {
    let corpus = corpus::load_corpus(path)?;
    if corpus.is_empty() {
        anyhow::bail!(
            "The {what} corpus at {} is empty; the benchmark needs at least one text.",
            path.display()
        );
    }
    Ok(corpus)
}

/// Write rendered output to a file, or to stdout when no file is given.
fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
            println!("{} {}", "Saved:".bold(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
