//! quizmaster-core: question and participant stores, quiz sessions, and
//! score ranking.
//!
//! This crate holds all quiz state and logic; the `quizmaster` binary only
//! adds console prompts on top of it.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod ranking;
pub mod session;
pub mod store;
pub mod system;

pub use error::QuizError;
pub use model::{Choice, Participant, Question, CHOICE_COUNT};
pub use ranking::{Direction, SortAlgorithm};
pub use session::{AnswerSource, QuizOutcome, ScriptedAnswers};
pub use system::QuizSystem;
