use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the normalized tokens of a text.
    Normalize(NormalizeArgs),
    /// List the configured recommendation modes.
    Modes(ModesArgs),
    /// Recommend a book for a free-text description.
    Recommend(RecommendArgs),
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to normalize.
    pub text: String,

    /// Print tokens as a JSON array instead of one per line.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ModesArgs {
    /// Recommender registry (default: $BOOKREC_CONFIG, then `bookrec.yaml`).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Recommender registry (default: $BOOKREC_CONFIG, then `bookrec.yaml`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mode to use, as listed by `modes`.
    #[arg(long)]
    pub mode: String,

    /// Free-text description of a book (at most 500 characters).
    pub query: String,

    /// Print the recommendation as JSON.
    #[arg(long)]
    pub json: bool,
}
