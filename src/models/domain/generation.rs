use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::domain::topic::is_placeholder;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Explanation,
    DetailedExplanation,
    Example,
    Quiz,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Explanation => write!(f, "explanation"),
            Operation::DetailedExplanation => write!(f, "detailed_explanation"),
            Operation::Example => write!(f, "example"),
            Operation::Quiz => write!(f, "quiz"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    operation: Operation,
    topic_or_description: String,
}

impl GenerationRequest {
    pub fn new(operation: Operation, topic_or_description: &str) -> AppResult<Self> {
        let value = topic_or_description.trim();
        if value.is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} requires a non-empty topic or description",
                operation
            )));
        }
        if is_placeholder(value) {
            return Err(AppError::ValidationError(
                "Select a topic before generating content".to_string(),
            ));
        }

        Ok(Self {
            operation,
            topic_or_description: value.to_string(),
        })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn topic_or_description(&self) -> &str {
        &self.topic_or_description
    }
}

/// Sampling parameters sent with a completion call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
}

impl CompletionParams {
    pub const fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
        }
    }

    pub const fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub const fn with_penalties(mut self, frequency: f32, presence: f32) -> Self {
        self.frequency_penalty = Some(frequency);
        self.presence_penalty = Some(presence);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub params: CompletionParams,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub raw_text: String,
    pub rendered_markdown: String,
}

impl GenerationResult {
    pub fn from_raw(raw_text: String, suffix: Option<&str>) -> Self {
        let mut rendered_markdown = raw_text.trim().to_string();
        if let Some(suffix) = suffix {
            rendered_markdown.push_str(suffix);
        }

        Self {
            raw_text,
            rendered_markdown,
        }
    }
}
