//! Runtime configuration utilities for mood-screen.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Folder holding the encoder, scaler and classifier artefacts.
    pub models_dir: PathBuf,
    /// Root folder for the assessment history store.
    pub data_dir: PathBuf,
    /// Minimum trimmed journal length, in characters, accepted for analysis.
    pub min_journal_chars: usize,
    /// Default look-back window for chart data.
    pub history_days: i64,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let models_dir = env::var("MODELS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./models"));
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let min_journal_chars = env::var("MIN_JOURNAL_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let history_days = env::var("HISTORY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;

        Ok(Self {
            models_dir,
            data_dir,
            min_journal_chars,
            history_days,
        })
    }

    /// Convenience helper for derived data path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}
