//! Quiz sessions: random question selection and answer scoring.
//!
//! A quiz moves through `Selecting -> Awaiting answer (xN) -> Scored`. The
//! selecting step is [`select_questions`]; [`QuizSession`] holds the state
//! while answers come in from an [`AnswerSource`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{Choice, Question};

/// Something that can present a question and return the chosen answer.
///
/// The console implements this by printing and reading a line; tests use a
/// scripted list of choices.
pub trait AnswerSource {
    /// Present `question` (1-based `number` of `total`) and return a choice.
    fn answer(&mut self, number: usize, total: usize, question: &Question)
        -> Result<Choice, QuizError>;
}

/// Shuffle `questions` in place and return copies of the first `count`.
///
/// The caller's slice keeps its shuffled order afterward.
pub fn select_questions<R: Rng + ?Sized>(
    questions: &mut [Question],
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    questions.shuffle(rng);
    let take = count.min(questions.len());
    tracing::debug!(requested = count, selected = take, "questions selected");
    questions[..take].to_vec()
}

/// Outcome of a single answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: u32,
    pub choice: Choice,
    pub correct: bool,
}

/// An in-progress quiz over a fixed list of questions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<AnswerRecord>,
    score: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            score: 0,
        }
    }

    /// The question awaiting an answer, if any.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.answers.len())
    }

    /// 1-based number of the current question.
    pub fn position(&self) -> usize {
        self.answers.len() + 1
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    /// Answer the current question. Returns whether it was correct, or
    /// `None` when the session is already finished.
    pub fn submit(&mut self, choice: Choice) -> Option<bool> {
        let question = self.current()?;
        let correct = question.is_correct(choice);
        let record = AnswerRecord {
            question_id: question.id,
            choice,
            correct,
        };
        self.answers.push(record);
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Drive the session to the end with answers from `source`.
    pub fn run(&mut self, source: &mut dyn AnswerSource) -> Result<(), QuizError> {
        let total = self.total();
        while let Some(question) = self.current() {
            let choice = source.answer(self.position(), total, question)?;
            self.submit(choice);
        }
        Ok(())
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn finish(self) -> QuizOutcome {
        QuizOutcome {
            score: self.score,
            total: self.questions.len(),
            answers: self.answers,
        }
    }
}

/// Final result of a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    /// Number of correct answers.
    pub score: usize,
    /// Number of questions asked.
    pub total: usize,
    pub answers: Vec<AnswerRecord>,
}

/// Replays a fixed list of choices. Useful for tests and scripted runs.
#[derive(Debug, Clone)]
pub struct ScriptedAnswers {
    choices: std::vec::IntoIter<Choice>,
}

impl ScriptedAnswers {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self {
            choices: choices.into_iter(),
        }
    }

    /// Build from raw numbers, rejecting anything outside `1..=4`.
    pub fn from_numbers(numbers: &[i64]) -> Result<Self, QuizError> {
        let choices = numbers
            .iter()
            .map(|&n| Choice::new(n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(choices))
    }
}

impl AnswerSource for ScriptedAnswers {
    fn answer(&mut self, _: usize, _: usize, _: &Question) -> Result<Choice, QuizError> {
        self.choices.next().ok_or_else(|| {
            QuizError::Input(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "scripted answers exhausted",
            ))
        })
    }
}
