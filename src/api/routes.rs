//! HTTP route handlers for Axum.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Utc};
use tracing::error;

use crate::{
    api::types::{ChartQuery, HealthDto, HistoryQuery, JournalRequest, Phq9Request, QuestionsDto},
    assessment::{phq9, AnalysisKind, QuestionnaireResponse, SeverityResult},
    data::history::{self, ChartData, HistoryRecord, HistorySummary},
    error::AssessmentError,
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

fn validation(err: AssessmentError) -> (StatusCode, String) {
    (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
}

fn internal(err: impl std::fmt::Display) -> (StatusCode, String) {
    error!(error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

fn check_user(user_id: Option<&str>) -> Result<(), (StatusCode, String)> {
    match user_id {
        Some(id) if !history::is_valid_user_id(id) => Err((
            StatusCode::BAD_REQUEST,
            format!("invalid user id {id:?}"),
        )),
        _ => Ok(()),
    }
}

pub async fn phq9_questions() -> Json<QuestionsDto> {
    Json(QuestionsDto {
        questions: &phq9::QUESTIONS,
        min_answer: 0,
        max_answer: phq9::MAX_ANSWER,
    })
}

pub async fn score_phq9(
    State(state): State<AppState>,
    Json(request): Json<Phq9Request>,
) -> ApiResult<SeverityResult> {
    check_user(request.user_id.as_deref())?;
    let result = state
        .assessor
        .score_questionnaire(&request.responses)
        .map_err(validation)?;

    if let Some(user_id) = request.user_id {
        let responses = QuestionnaireResponse::new(&request.responses).map_err(validation)?;
        let store = state.store.clone();
        let stored = result.clone();
        tokio::task::spawn_blocking(move || store.record(&user_id, Some(responses), &stored))
            .await
            .map_err(internal)?
            .map_err(internal)?;
    }
    Ok(Json(result))
}

pub async fn analyze_journal(
    State(state): State<AppState>,
    Json(request): Json<JournalRequest>,
) -> ApiResult<SeverityResult> {
    check_user(request.user_id.as_deref())?;
    let assessor = state.assessor.clone();
    let store = state.store.clone();

    // Encoder inference is CPU-bound; keep it off the async workers.
    let (result, persisted) = tokio::task::spawn_blocking(move || {
        let result = assessor.analyze_text(&request.text)?;
        let persisted = match request.user_id.as_deref() {
            Some(user_id) => store.record(user_id, None, &result).map(|_| ()),
            None => Ok(()),
        };
        Ok::<_, AssessmentError>((result, persisted))
    })
    .await
    .map_err(internal)?
    .map_err(validation)?;
    persisted.map_err(internal)?;

    Ok(Json(result.without_embedding()))
}

pub async fn chart_data(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> ApiResult<ChartData> {
    check_user(Some(&user_id))?;
    let days = query
        .days
        .unwrap_or(state.settings.history_days)
        .clamp(0, 36_500);
    let since = Utc::now() - Duration::days(days);
    let store = state.store.clone();
    let chart = tokio::task::spawn_blocking(move || store.chart_data(&user_id, since))
        .await
        .map_err(internal)?
        .map_err(internal)?;
    Ok(Json(chart))
}

pub async fn history_list(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Vec<HistoryRecord>> {
    check_user(Some(&user_id))?;
    let kind = query
        .kind
        .as_deref()
        .map(str::parse::<AnalysisKind>)
        .transpose()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let store = state.store.clone();
    let records = tokio::task::spawn_blocking(move || store.recent(&user_id, kind, query.limit))
        .await
        .map_err(internal)?
        .map_err(internal)?;
    Ok(Json(records))
}

pub async fn history_summary(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<HistorySummary> {
    check_user(Some(&user_id))?;
    let store = state.store.clone();
    let summary = tokio::task::spawn_blocking(move || store.summary(&user_id))
        .await
        .map_err(internal)?
        .map_err(internal)?;
    Ok(Json(summary))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    let capabilities = state.assessor.capabilities();
    Json(HealthDto {
        status: "healthy",
        ml_service: capabilities.fully_loaded,
        capabilities,
        timestamp: Utc::now(),
    })
}
