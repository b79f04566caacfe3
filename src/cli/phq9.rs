//! CLI entry-point for PHQ-9 questionnaire scoring.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    assessment::{self, phq9::QUESTIONS, QuestionnaireResponse},
    cli::print_json,
    config::Settings,
    data::history::HistoryStore,
};

/// Args for the `phq9` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Nine answers in questionnaire order, each between 0 and 3.
    #[arg(required_unless_present = "questions", allow_negative_numbers = true)]
    pub responses: Vec<i64>,
    /// Print the nine prompts instead of scoring.
    #[arg(long, conflicts_with_all = ["responses", "user"])]
    pub questions: bool,
    /// Persist the result to this user's history.
    #[arg(long)]
    pub user: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    if args.questions {
        return print_json(&QUESTIONS);
    }

    let result = assessment::score_questionnaire(&args.responses)?;
    info!(total = ?result.total_score, severity = %result.severity, "scored questionnaire");

    if let Some(user) = args.user.as_deref() {
        let store = HistoryStore::open(&settings)?;
        let responses = QuestionnaireResponse::new(&args.responses)?;
        store.record(user, Some(responses), &result)?;
    }
    print_json(&result)
}
