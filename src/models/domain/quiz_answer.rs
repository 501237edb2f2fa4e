use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Correct,
    Incorrect,
    Unparseable,
}

impl CheckOutcome {
    /// Fixed message shown to the student for each outcome.
    pub fn message(&self) -> &'static str {
        match self {
            CheckOutcome::Correct => "Correct! 🎉",
            CheckOutcome::Incorrect => "Oops! That's not correct. Try again.",
            CheckOutcome::Unparseable => {
                "Couldn't find the correct answer. Please check the question format."
            }
        }
    }
}

/// One submission against one generated quiz. Never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizAnswer {
    pub correct_letter: Option<String>,
    pub user_letter: String,
}

impl QuizAnswer {
    pub fn outcome(&self) -> CheckOutcome {
        match &self.correct_letter {
            None => CheckOutcome::Unparseable,
            Some(letter) if *letter == self.user_letter => CheckOutcome::Correct,
            Some(_) => CheckOutcome::Incorrect,
        }
    }
}
