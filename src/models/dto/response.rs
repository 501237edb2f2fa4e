use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{CheckOutcome, Operation, QuizAnswer};

pub const PERIODIC_TABLE_URL: &str = "https://ptable.com/";

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub operation: Operation,
    pub topic: String,
    pub markdown: String,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResponse {
    pub fn new(operation: Operation, topic: impl Into<String>, markdown: String) -> Self {
        Self {
            operation,
            topic: topic.into(),
            markdown,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckAnswerResponse {
    pub outcome: CheckOutcome,
    pub message: &'static str,
    pub correct_letter: Option<String>,
    pub user_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<serde_json::Value>,
}

impl CheckAnswerResponse {
    pub fn new(answer: QuizAnswer, animation: Option<serde_json::Value>) -> Self {
        let outcome = answer.outcome();
        Self {
            outcome,
            message: outcome.message(),
            correct_letter: answer.correct_letter,
            user_letter: answer.user_letter,
            animation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodicTableResponse {
    pub url: &'static str,
    pub markdown: String,
}

impl Default for PeriodicTableResponse {
    fn default() -> Self {
        Self {
            url: PERIODIC_TABLE_URL,
            markdown: format!(
                "Visit the interactive [Periodic Table of Elements]({}) on PTable.",
                PERIODIC_TABLE_URL
            ),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
