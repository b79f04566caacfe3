//! CLI entry-point reporting the loaded model capabilities.

use anyhow::Result;
use tracing::instrument;

use crate::{
    cli::{load_assessor, print_json},
    config::Settings,
};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let assessor = load_assessor(&settings);
    print_json(&assessor.capabilities())
}
