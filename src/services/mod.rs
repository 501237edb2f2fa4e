pub mod animation_service;
pub mod answer_checker;
pub mod completion_client;
pub mod content_generator;
pub mod http_helpers;
pub mod markdown;

pub use animation_service::AnimationService;
pub use completion_client::{CompletionClient, OpenAiCompletionClient};
pub use content_generator::ContentGenerator;
