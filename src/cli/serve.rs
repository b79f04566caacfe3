//! CLI entry-point for serving the HTTP API.

use std::sync::Arc;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    api::{self, AppState},
    cli::load_assessor,
    config::Settings,
    data::history::HistoryStore,
};

/// Run the Axum server.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Port to bind (default 8080).
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Host address, defaults to localhost.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    // Artefacts finish loading before the listener binds.
    let assessor = load_assessor(&settings);
    let store = Arc::new(HistoryStore::open(&settings)?);
    let state = AppState {
        settings,
        assessor,
        store,
    };
    api::serve(state, args.host, args.port).await
}
