use crate::models::domain::{CompletionParams, Operation};

pub const RECOMMENDED_READING_CITATION: &str = "\n\n**Recommended Reading:** Lister, T & Renshaw, J (2008) AQA Chemistry As/A2 Nelson Thornes ISBN 978-0-19-835181-8 (As) & 978-0-19-835771-1 (A2).";

pub const EXPLANATION_PARAMS: CompletionParams = CompletionParams::new(300, 0.5);
pub const DETAILED_EXPLANATION_PARAMS: CompletionParams = CompletionParams::new(750, 0.5)
    .with_top_p(1.0)
    .with_penalties(0.0, 0.0);
pub const EXAMPLE_PARAMS: CompletionParams = CompletionParams::new(300, 0.5);
// Higher temperature so repeated quizzes on one topic vary their wording.
pub const QUIZ_PARAMS: CompletionParams = CompletionParams::new(300, 0.7);

pub fn explanation_prompt(topic: &str) -> String {
    format!(
        "As a Professional Chemist, explain the concept of {topic} in simple terms and using \
         analogies, suitable for A-level students. Keep the explanation concise, under 300 words. \
         Also, suggest a reading from Lister, T & Renshaw, J (2008) AQA Chemistry."
    )
}

pub fn detailed_explanation_prompt(description: &str) -> String {
    format!(
        "Explain in detail for A-level Chemistry students: {description}. Provide a clear, \
         step-by-step explanation to help understand the concept, including any relevant \
         examples or diagrams."
    )
}

pub fn example_prompt(topic: &str) -> String {
    format!(
        "Provide a simple example illustrating the chemistry topic: {topic}, suitable for \
         A-level students. Include a problem statement and a solution. Keep it under 300 words."
    )
}

pub fn quiz_prompt(topic: &str) -> String {
    format!(
        "Generate an interactive quiz question for A-level students on the topic of {topic}, \
         including multiple choices and indicating the correct answer. Provide a brief \
         explanation for the correct answer. State the answer on its own line in the form \
         \"Correct answer: <letter>\"."
    )
}

pub fn prompt_for(operation: Operation, topic_or_description: &str) -> String {
    match operation {
        Operation::Explanation => explanation_prompt(topic_or_description),
        Operation::DetailedExplanation => detailed_explanation_prompt(topic_or_description),
        Operation::Example => example_prompt(topic_or_description),
        Operation::Quiz => quiz_prompt(topic_or_description),
    }
}

pub fn params_for(operation: Operation) -> CompletionParams {
    match operation {
        Operation::Explanation => EXPLANATION_PARAMS,
        Operation::DetailedExplanation => DETAILED_EXPLANATION_PARAMS,
        Operation::Example => EXAMPLE_PARAMS,
        Operation::Quiz => QUIZ_PARAMS,
    }
}

/// Text appended to the trimmed completion, if any.
pub fn suffix_for(operation: Operation) -> Option<&'static str> {
    match operation {
        Operation::Explanation => Some(RECOMMENDED_READING_CITATION),
        _ => None,
    }
}
