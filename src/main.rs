use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    bookrec::logging::init().context("init logging")?;

    let cli = bookrec::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        bookrec::cli::Command::Normalize(args) => {
            bookrec::normalize::run(args).context("normalize")?;
        }
        bookrec::cli::Command::Modes(args) => {
            bookrec::recommender::modes(args).context("modes")?;
        }
        bookrec::cli::Command::Recommend(args) => {
            bookrec::recommender::run(args).context("recommend")?;
        }
    }

    Ok(())
}
