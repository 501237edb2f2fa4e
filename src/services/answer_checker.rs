//! Checks a student's letter against the answer marker inside generated quiz text.
//!
//! Only the two literal casings `Correct answer:` and `Correct Answer:` are
//! recognised; other spellings make the quiz unparseable.

use crate::models::domain::{CheckOutcome, QuizAnswer};

const ANSWER_MARKERS: [&str; 2] = ["Correct answer:", "Correct Answer:"];

/// Letter named on the first answer-marker line, uppercased.
///
/// The value is the text between the first and second colon of that line,
/// trimmed. `None` only when no marker line exists.
pub fn extract_correct_letter(quiz_text: &str) -> Option<String> {
    let line = quiz_text
        .lines()
        .find(|line| ANSWER_MARKERS.iter().any(|marker| line.contains(marker)))?;

    Some(
        line.split(':')
            .nth(1)
            .unwrap_or_default()
            .trim()
            .to_uppercase(),
    )
}

pub fn evaluate(quiz_text: &str, user_input: &str) -> QuizAnswer {
    QuizAnswer {
        correct_letter: extract_correct_letter(quiz_text),
        user_letter: user_input.trim().to_uppercase(),
    }
}

pub fn check(quiz_text: &str, user_input: &str) -> CheckOutcome {
    evaluate(quiz_text, user_input).outcome()
}
