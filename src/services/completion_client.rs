use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{CompletionParams, CompletionRequest},
};

/// Seam to the hosted text-completion endpoint.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Candidate texts in the order the endpoint returned them.
    async fn complete(&self, request: CompletionRequest) -> AppResult<Vec<String>>;
}

pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(config.openai_api_base.as_str());

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(flatten)]
    params: CompletionParams,
}

impl From<CompletionRequest> for ChatCompletionBody {
    fn from(request: CompletionRequest) -> Self {
        Self {
            model: request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: request.prompt,
            }],
            params: request.params,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionReply {
    fn into_texts(self) -> Vec<String> {
        self.choices
            .into_iter()
            .map(|choice| choice.message.content.unwrap_or_default())
            .collect()
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> AppResult<Vec<String>> {
        log::debug!(
            "Sending completion request to model {} (max_tokens={}, temperature={})",
            request.model,
            request.params.max_tokens,
            request.params.temperature
        );

        let body = ChatCompletionBody::from(request);
        let reply: ChatCompletionReply = self.client.chat().create_byot(body).await?;

        Ok(reply.into_texts())
    }
}
