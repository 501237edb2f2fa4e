#[cfg(test)]
pub mod fixtures {
    pub const QUIZ_TEXT_ANSWER_B: &str = "Question: Which change increases the rate of reaction?\n\
A) Lowering the temperature\n\
B) Adding a catalyst\n\
C) Reducing the concentration\n\
D) Using larger particles\n\
Correct answer: B\n\
Explanation: A catalyst provides an alternative pathway with a lower activation energy.";

    pub const QUIZ_TEXT_NO_ANSWER: &str = "Question: What is the pH of pure water at 25°C?\n\
A) 5\n\
B) 7\n\
C) 9\n\
The answer is B because water is neutral.";
}

#[cfg(test)]
pub mod mocks {
    use async_trait::async_trait;

    use crate::{
        errors::AppResult, models::domain::CompletionRequest,
        services::completion_client::CompletionClient,
    };

    mockall::mock! {
        pub Completion {}

        #[async_trait]
        impl CompletionClient for Completion {
            async fn complete(&self, request: CompletionRequest) -> AppResult<Vec<String>>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_quizzes_differ_in_marker() {
        assert!(QUIZ_TEXT_ANSWER_B.contains("Correct answer: B"));
        assert!(!QUIZ_TEXT_NO_ANSWER.contains("Correct answer:"));
        assert!(!QUIZ_TEXT_NO_ANSWER.contains("Correct Answer:"));
    }
}
