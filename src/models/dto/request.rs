use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownFormat {
    #[default]
    Plain,
    Bullets,
}

/// A pick from the topic list. The placeholder is accepted and ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TopicSelectionRequest {
    #[validate(length(max = 200))]
    pub topic: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExplanationRequest {
    #[validate(length(max = 200))]
    pub topic: String,

    #[serde(default)]
    pub format: MarkdownFormat,
}

/// Free-text topic typed in by the student for exam preparation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExamPrepRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DetailedExplanationRequest {
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckAnswerRequest {
    #[validate(length(max = 20000))]
    pub quiz_text: String,

    #[validate(length(min = 1, max = 16))]
    pub answer: String,
}
