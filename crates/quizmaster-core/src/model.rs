//! Core data model types for quizmaster.
//!
//! These are the records the stores hold: multiple-choice questions,
//! participants, and the validated answer selection that links them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::QuizError;

/// Number of answer choices every question carries.
pub const CHOICE_COUNT: usize = 4;

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Sequential identifier, assigned by the store.
    pub id: u32,
    /// The question text.
    pub content: String,
    /// The four answer choices, addressed 1–4.
    pub choices: [String; CHOICE_COUNT],
    /// Literal text of the correct choice.
    pub answer: String,
    /// Times this question was answered correctly.
    #[serde(default)]
    pub correct_count: u32,
    /// Times this question was answered incorrectly.
    #[serde(default)]
    pub incorrect_count: u32,
}

impl Question {
    /// Text of the given choice.
    pub fn choice_text(&self, choice: Choice) -> &str {
        &self.choices[choice.index()]
    }

    /// Whether the given choice's text matches the stored answer.
    pub fn is_correct(&self, choice: Choice) -> bool {
        self.choice_text(choice) == self.answer
    }

    /// Record the outcome of one answer.
    pub fn record_answer(&mut self, correct: bool) {
        if correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }
    }
}

/// An answer selection, always within `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice(u8);

impl Choice {
    /// Validate a 1-based selection.
    pub fn new(number: i64) -> Result<Self, QuizError> {
        if (1..=CHOICE_COUNT as i64).contains(&number) {
            Ok(Choice(number as u8))
        } else {
            Err(QuizError::AnswerOutOfRange(number))
        }
    }

    /// The 1-based number the operator typed.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position in [`Question::choices`].
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<i64> for Choice {
    type Error = QuizError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        Choice::new(number)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named quiz-taker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Sequential identifier, assigned by the store.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Score of the most recent quiz.
    #[serde(default)]
    pub score: u32,
}
