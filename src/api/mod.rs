//! HTTP layer exposing questionnaire scoring, journal analysis and history views.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{assessment::Assessor, config::Settings, data::history::HistoryStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub assessor: Assessor,
    pub store: Arc<HistoryStore>,
}

/// Build the router; the bundle inside `state` must already be loaded.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/phq9", post(routes::score_phq9))
        .route("/phq9/questions", get(routes::phq9_questions))
        .route("/journal", post(routes::analyze_journal))
        .route("/users/:user_id/chart", get(routes::chart_data))
        .route("/users/:user_id/history", get(routes::history_list))
        .route("/users/:user_id/summary", get(routes::history_summary))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, host: String, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let capabilities = state.assessor.capabilities();
    let router = router(state);
    info!(%addr, ?capabilities, "serving mood-screen API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
