//! Request and response bodies for the JSON API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bundle::Capabilities;

#[derive(Debug, Clone, Deserialize)]
pub struct Phq9Request {
    pub responses: Vec<i64>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JournalRequest {
    pub text: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
    /// `phq9` or `journal`; both kinds when absent.
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsDto {
    pub questions: &'static [&'static str],
    pub min_answer: u8,
    pub max_answer: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub ml_service: bool,
    pub capabilities: Capabilities,
    pub timestamp: DateTime<Utc>,
}
