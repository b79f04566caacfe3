use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mood_screen::{
    api::{router, AppState},
    assessment::Assessor,
    bundle::ModelBundle,
    config::Settings,
    data::history::HistoryStore,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(dir: &tempfile::TempDir) -> Router {
    let settings = Settings {
        models_dir: dir.path().join("models"),
        data_dir: dir.path().join("data"),
        min_journal_chars: 10,
        history_days: 30,
    };
    let store = HistoryStore::open(&settings).unwrap();
    router(AppState {
        assessor: Assessor::new(Arc::new(ModelBundle::sentiment_only())),
        store: Arc::new(store),
        settings,
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn phq9_scores_urgent_totals() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = send(
        &app(&dir),
        post("/phq9", json!({ "responses": [3, 3, 3, 3, 2, 2, 1, 0, 1] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis_type"], "PHQ-9");
    assert_eq!(body["total_score"], 18);
    assert_eq!(body["max_score"], 27);
    assert_eq!(body["severity"], "Moderately Severe");
    assert_eq!(body["urgent"], true);
    assert_eq!(body["method"], "rule_based");
    assert!(body.get("confidence").is_none());
}

#[tokio::test]
async fn phq9_validation_is_unprocessable() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir);
    let (status, body) = send(&app, post("/phq9", json!({ "responses": [1, 1, 1, 1, 1, 1, 1, 1] }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.as_str().unwrap().contains("exactly 9"));

    let (status, _) = send(
        &app,
        post("/phq9", json!({ "responses": [0, 0, 0, 0, 0, 0, 0, 0, 5] })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn short_journal_is_unprocessable() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = send(&app(&dir), post("/journal", json!({ "text": "meh" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.as_str().unwrap().contains("too short"));
}

#[tokio::test]
async fn journal_history_feeds_chart() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir);

    let (status, body) = send(
        &app,
        post(
            "/journal",
            json!({ "text": "I feel sad and hopeless about everything", "user_id": "gina" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis_type"], "Journal");
    assert_eq!(body["method"], "rule_based");
    assert_eq!(body["confidence"], 0.7);
    assert!(body["journal"].get("embedding").is_none());

    let (status, _) = send(
        &app,
        post("/phq9", json!({ "responses": [1, 1, 1, 1, 1, 1, 1, 1, 1], "user_id": "gina" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, chart) = send(&app, get("/users/gina/chart?days=7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(chart["phq9_scores"].as_array().unwrap().len(), 1);
    assert_eq!(chart["phq9_scores"][0]["score"], 9);
    let sentiment = chart["journal_sentiment"].as_array().unwrap();
    assert_eq!(sentiment.len(), 1);
    assert!(sentiment[0]["compound"].as_f64().unwrap() < 0.0);

    let (status, chart) = send(&app, get("/users/nobody/chart")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(chart["phq9_scores"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_user_ids_are_bad_requests() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir);
    let (status, _) = send(
        &app,
        post("/phq9", json!({ "responses": [0, 0, 0, 0, 0, 0, 0, 0, 0], "user_id": "../../x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/users/bad%20id/chart")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_capabilities() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = send(&app(&dir), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ml_service"], false);
    assert_eq!(body["capabilities"]["sentiment"], true);
    assert_eq!(body["capabilities"]["encoder"], false);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn history_lists_newest_first_and_summarizes() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir);
    for responses in [json!([0, 0, 0, 0, 0, 0, 0, 0, 0]), json!([3, 3, 3, 3, 3, 3, 3, 3, 3])] {
        let (status, _) = send(
            &app,
            post("/phq9", json!({ "responses": responses, "user_id": "jo" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = send(
        &app,
        post("/journal", json!({ "text": "Quiet evening with tea", "user_id": "jo" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = send(&app, get("/users/jo/history")).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["result"]["analysis_type"], "Journal");
    assert_eq!(list[1]["result"]["total_score"], 27);

    let (_, phq9_only) = send(&app, get("/users/jo/history?kind=phq9&limit=1")).await;
    let phq9_only = phq9_only.as_array().unwrap();
    assert_eq!(phq9_only.len(), 1);
    assert_eq!(phq9_only[0]["responses"], json!([3, 3, 3, 3, 3, 3, 3, 3, 3]));

    let (status, _) = send(&app, get("/users/jo/history?kind=dream")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, summary) = send(&app, get("/users/jo/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_assessments"], 2);
    assert_eq!(summary["total_journal_entries"], 1);
    assert_eq!(summary["latest_phq9"]["result"]["total_score"], 27);
    assert_eq!(summary["recent_journal"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn questions_are_listed_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = send(&app(&dir), get("/phq9/questions")).await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 9);
    assert_eq!(questions[0], "Little interest or pleasure in doing things");
    assert_eq!(body["max_answer"], 3);
}
