//! Quiz error types.
//!
//! Every fallible store or session operation returns a [`QuizError`], so the
//! menu can tell a recoverable lookup miss apart from a dead input stream
//! without string matching.

use std::io;

use thiserror::Error;

/// Errors that can occur while operating on a [`crate::system::QuizSystem`].
#[derive(Debug, Error)]
pub enum QuizError {
    /// No question has the given identifier.
    #[error("question not found: {0}")]
    QuestionNotFound(u32),

    /// No participant has the given identifier.
    #[error("participant not found: {0}")]
    ParticipantNotFound(u32),

    /// An answer selection outside `1..=4`.
    #[error("answer {0} is out of range, choose between 1 and 4")]
    AnswerOutOfRange(i64),

    /// The answer source could not produce an answer.
    #[error("input failed: {0}")]
    Input(#[from] io::Error),
}

impl QuizError {
    /// Returns `true` for lookup misses the operator can simply retry.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QuizError::QuestionNotFound(_) | QuizError::ParticipantNotFound(_)
        )
    }
}
