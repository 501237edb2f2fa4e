pub mod generation;
pub mod quiz_answer;
pub mod topic;
pub use generation::{
    CompletionParams, CompletionRequest, GenerationRequest, GenerationResult, Operation,
};
pub use quiz_answer::{CheckOutcome, QuizAnswer};
pub use topic::{TopicCatalog, TopicSelection, PLACEHOLDER_TOPIC, TOPICS};
