//! Command-line interface wiring for mood-screen.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::{assessment::Assessor, bundle::ModelBundle, config::Settings};

pub mod history;
pub mod journal;
pub mod phq9;
pub mod serve;
pub mod status;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "PHQ-9 and journal depression severity screening", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Phq9(args) => phq9::run(args, settings).await,
            Commands::Journal(args) => journal::run(args, settings).await,
            Commands::Status => status::run(settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::History(args) => history::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score nine PHQ-9 answers (each 0-3).
    Phq9(phq9::Args),
    /// Analyze a journal entry.
    Journal(journal::Args),
    /// Report which model artefacts are loaded.
    Status,
    /// Serve the JSON API.
    Serve(serve::Args),
    /// Inspect or export a user's assessment history.
    History(history::Args),
}

/// Load the model bundle once and wrap it for inference.
pub fn load_assessor(settings: &Settings) -> Assessor {
    let bundle = ModelBundle::load(&settings.models_dir);
    let assessor =
        Assessor::new(Arc::new(bundle)).with_min_journal_chars(settings.min_journal_chars);
    info!(capabilities = ?assessor.capabilities(), "model bundle ready");
    assessor
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
