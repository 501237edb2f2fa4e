use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{AnimationService, CompletionClient, ContentGenerator, OpenAiCompletionClient},
};

#[derive(Clone)]
pub struct AppState {
    pub content_generator: Arc<ContentGenerator>,
    pub animation_service: Arc<AnimationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        if config.is_production() {
            config.validate_for_production()?;
        }

        let client = Arc::new(OpenAiCompletionClient::new(&config));
        Ok(Self::with_client(config, client))
    }

    /// Builds the state around any completion client, e.g. a stub in tests.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let content_generator = Arc::new(ContentGenerator::new(
            client,
            config.completion_model.clone(),
        ));
        let animation_service = Arc::new(AnimationService::new(&config));

        Self {
            content_generator,
            animation_service,
            config: Arc::new(config),
        }
    }
}
