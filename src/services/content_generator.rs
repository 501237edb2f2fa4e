use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{
        CompletionRequest, GenerationRequest, GenerationResult, Operation, TopicSelection,
    },
    services::completion_client::CompletionClient,
};

/// Turns a topic into a prompt, calls the completion endpoint once and
/// post-processes the first candidate.
pub struct ContentGenerator {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl ContentGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn explain(&self, topic: &str) -> AppResult<GenerationResult> {
        self.generate(GenerationRequest::new(Operation::Explanation, topic)?)
            .await
    }

    pub async fn explain_detailed(&self, description: &str) -> AppResult<GenerationResult> {
        self.generate(GenerationRequest::new(
            Operation::DetailedExplanation,
            description,
        )?)
        .await
    }

    pub async fn give_example(&self, topic: &str) -> AppResult<GenerationResult> {
        self.generate(GenerationRequest::new(Operation::Example, topic)?)
            .await
    }

    /// The "Correct answer: X" line is requested by the prompt only; its
    /// absence is detected when the answer is checked.
    pub async fn make_quiz(&self, topic: &str) -> AppResult<GenerationResult> {
        self.generate(GenerationRequest::new(Operation::Quiz, topic)?)
            .await
    }

    pub async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationResult> {
        let operation = request.operation();
        let topic = request.topic_or_description();
        log::info!("Generating {} for '{}'", operation, topic);

        let completion = CompletionRequest {
            model: self.model.clone(),
            prompt: prompts::prompt_for(operation, topic),
            params: prompts::params_for(operation),
        };

        let choices = self.client.complete(completion).await.map_err(|e| {
            log::error!("Completion call for {} on '{}' failed: {}", operation, topic, e);
            match e {
                AppError::GenerationError(_) => e,
                other => AppError::GenerationError(other.to_string()),
            }
        })?;

        let raw_text = choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                log::error!("Completion for {} on '{}' returned no choices", operation, topic);
                AppError::GenerationError("completion endpoint returned no choices".to_string())
            })?;

        log::info!(
            "Generated {} for '{}' ({} chars)",
            operation,
            topic,
            raw_text.len()
        );

        Ok(GenerationResult::from_raw(
            raw_text,
            prompts::suffix_for(operation),
        ))
    }

    /// Resolves a topic-picker selection. The placeholder yields `None`
    /// without contacting the endpoint.
    pub async fn generate_for_selection(
        &self,
        operation: Operation,
        selection: &str,
    ) -> AppResult<Option<GenerationResult>> {
        match TopicSelection::from_selection(selection) {
            TopicSelection::Placeholder => {
                log::debug!("Ignoring placeholder selection for {}", operation);
                Ok(None)
            }
            TopicSelection::Topic(topic) => self
                .generate(GenerationRequest::new(operation, &topic)?)
                .await
                .map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::prompts::{
        EXAMPLE_PARAMS, EXPLANATION_PARAMS, QUIZ_PARAMS, RECOMMENDED_READING_CITATION,
    };
    use crate::models::domain::TOPICS;
    use crate::test_utils::{fixtures::QUIZ_TEXT_ANSWER_B, mocks::MockCompletion};
    use mockall::predicate::function;

    fn generator(mock: MockCompletion) -> ContentGenerator {
        ContentGenerator::new(Arc::new(mock), "test-model")
    }

    fn returning(text: &'static str) -> MockCompletion {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .returning(move |_| Ok(vec![text.to_string()]));
        mock
    }

    #[actix_web::test]
    async fn test_every_topic_produces_markdown_for_each_operation() {
        let generator = generator(returning("  Stub completion text.  "));

        for topic in TOPICS {
            let explanation = generator.explain(topic).await.unwrap();
            let example = generator.give_example(topic).await.unwrap();
            let quiz = generator.make_quiz(topic).await.unwrap();

            assert!(!explanation.rendered_markdown.is_empty());
            assert_eq!(example.rendered_markdown, "Stub completion text.");
            assert_eq!(quiz.rendered_markdown, "Stub completion text.");
        }
    }

    #[actix_web::test]
    async fn test_explanation_ends_with_citation() {
        for stub in ["", "   \n", "x", "Atoms are small.\n\n", "**Bold** ending"] {
            let mut mock = MockCompletion::new();
            mock.expect_complete()
                .returning(move |_| Ok(vec![stub.to_string()]));
            let result = generator(mock).explain("Atomic Structure").await.unwrap();

            assert!(result.rendered_markdown.ends_with(RECOMMENDED_READING_CITATION));
        }
    }

    #[actix_web::test]
    async fn test_blank_choice_is_returned_not_rejected() {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .returning(|_| Ok(vec!["   \n".to_string()]));

        let generator = generator(mock);
        let explanation = generator.explain("Kinetics").await.unwrap();
        let example = generator.give_example("Kinetics").await.unwrap();

        assert_eq!(
            explanation.rendered_markdown,
            RECOMMENDED_READING_CITATION
        );
        assert_eq!(example.rendered_markdown, "");
    }

    #[actix_web::test]
    async fn test_explanation_sends_prompt_and_params() {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .with(function(|req: &CompletionRequest| {
                req.model == "test-model"
                    && req.params == EXPLANATION_PARAMS
                    && req.prompt.contains("explain the concept of Kinetics")
            }))
            .times(1)
            .returning(|_| Ok(vec!["ok".to_string()]));

        generator(mock).explain("Kinetics").await.unwrap();
    }

    #[actix_web::test]
    async fn test_example_and_quiz_use_their_own_params() {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .with(function(|req: &CompletionRequest| req.params == EXAMPLE_PARAMS))
            .times(1)
            .returning(|_| Ok(vec!["example".to_string()]));
        mock.expect_complete()
            .with(function(|req: &CompletionRequest| req.params == QUIZ_PARAMS))
            .times(1)
            .returning(|_| Ok(vec![QUIZ_TEXT_ANSWER_B.to_string()]));

        let generator = generator(mock);
        generator.give_example("Energetics").await.unwrap();
        let quiz = generator.make_quiz("Energetics").await.unwrap();

        assert!(quiz.rendered_markdown.contains("Correct answer: B"));
    }

    #[actix_web::test]
    async fn test_detailed_explanation_has_no_citation() {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .with(function(|req: &CompletionRequest| {
                req.params.max_tokens == 750
                    && req.params.frequency_penalty == Some(0.0)
                    && req.params.presence_penalty == Some(0.0)
            }))
            .times(1)
            .returning(|_| Ok(vec!["\nStep 1: balance atoms.\n".to_string()]));

        let result = generator(mock)
            .explain_detailed("balancing chemical equations")
            .await
            .unwrap();

        assert_eq!(result.rendered_markdown, "Step 1: balance atoms.");
    }

    #[actix_web::test]
    async fn test_only_first_choice_is_used() {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .returning(|_| Ok(vec!["first".to_string(), "second".to_string()]));

        let result = generator(mock).give_example("Kinetics").await.unwrap();
        assert_eq!(result.rendered_markdown, "first");
    }

    #[actix_web::test]
    async fn test_empty_choice_list_is_generation_error() {
        let mut mock = MockCompletion::new();
        mock.expect_complete().returning(|_| Ok(vec![]));

        let err = generator(mock).make_quiz("Kinetics").await.unwrap_err();
        assert!(matches!(err, AppError::GenerationError(_)));
    }

    #[actix_web::test]
    async fn test_client_failure_is_generation_error() {
        let mut mock = MockCompletion::new();
        mock.expect_complete()
            .returning(|_| Err(AppError::InternalError("connection reset".to_string())));

        let err = generator(mock).explain("Kinetics").await.unwrap_err();
        assert!(matches!(err, AppError::GenerationError(msg) if msg.contains("connection reset")));
    }

    #[actix_web::test]
    async fn test_placeholder_selection_never_calls_endpoint() {
        let mut mock = MockCompletion::new();
        mock.expect_complete().times(0);
        let generator = generator(mock);

        for operation in [Operation::Explanation, Operation::Example, Operation::Quiz] {
            let first = generator
                .generate_for_selection(operation, "Select a topic")
                .await
                .unwrap();
            let second = generator
                .generate_for_selection(operation, "Select a topic")
                .await
                .unwrap();
            assert!(first.is_none());
            assert!(second.is_none());
        }
    }

    #[actix_web::test]
    async fn test_real_selection_generates() {
        let generator = generator(returning("Example body"));
        let result = generator
            .generate_for_selection(Operation::Example, "Stoichiometry")
            .await
            .unwrap();

        assert_eq!(result.unwrap().rendered_markdown, "Example body");
    }

    #[actix_web::test]
    async fn test_direct_placeholder_request_is_rejected_without_call() {
        let mut mock = MockCompletion::new();
        mock.expect_complete().times(0);

        let err = generator(mock).explain("Select a topic").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
