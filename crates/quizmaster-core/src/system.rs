//! The quiz system: both stores plus the operations that span them.

use rand::Rng;

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::model::Participant;
use crate::parser::{parse_question_bank, QuestionBank};
use crate::ranking::{Direction, SortAlgorithm};
use crate::session::{select_questions, AnswerSource, QuizOutcome, QuizSession};
use crate::store::{ParticipantStore, QuestionStore};

/// All mutable quiz state. Created once and passed to whoever needs it.
#[derive(Debug, Clone, Default)]
pub struct QuizSystem {
    pub questions: QuestionStore,
    pub participants: ParticipantStore,
}

impl QuizSystem {
    /// An empty system.
    pub fn new() -> Self {
        Self::default()
    }

    /// A system seeded with the built-in sample questions.
    pub fn with_sample_questions() -> anyhow::Result<Self> {
        let mut system = Self::new();
        system.load_bank(&QuestionBank::sample()?);
        Ok(system)
    }

    /// Build the startup system described by `config`: sample questions
    /// first (if enabled), then the configured question bank.
    pub fn from_config(config: &QuizConfig) -> anyhow::Result<Self> {
        let mut system = if config.load_sample_questions {
            Self::with_sample_questions()?
        } else {
            Self::new()
        };
        if let Some(path) = &config.question_bank {
            let bank = parse_question_bank(path)?;
            tracing::info!("loading {} questions from {}", bank.len(), path.display());
            system.load_bank(&bank);
        }
        Ok(system)
    }

    /// Append every question in `bank`, in order. Returns the assigned ids.
    pub fn load_bank(&mut self, bank: &QuestionBank) -> Vec<u32> {
        let ids: Vec<u32> = bank
            .questions
            .iter()
            .map(|q| {
                self.questions
                    .add(q.content.clone(), q.choices.clone(), q.answer.clone())
            })
            .collect();
        tracing::debug!(count = ids.len(), "question bank loaded");
        ids
    }

    /// Administer a quiz of up to `count` random questions to a participant.
    ///
    /// The stored questions are left in their shuffled order. On success the
    /// participant's score is replaced by the number of correct answers and
    /// each asked question's answer counters are updated. If the answer
    /// source fails part-way, nothing is recorded.
    pub fn take_quiz<R: Rng + ?Sized>(
        &mut self,
        participant_id: u32,
        count: usize,
        rng: &mut R,
        source: &mut dyn AnswerSource,
    ) -> Result<QuizOutcome, QuizError> {
        self.participants.find(participant_id)?;

        let selected = select_questions(self.questions.as_mut_slice(), count, rng);
        let mut session = QuizSession::new(selected);
        session.run(source)?;
        let outcome = session.finish();

        for record in &outcome.answers {
            if let Some(question) = self.questions.get_mut(record.question_id) {
                question.record_answer(record.correct);
            }
        }
        let participant = self.participants.find_mut(participant_id)?;
        participant.score = u32::try_from(outcome.score).unwrap_or(u32::MAX);

        tracing::info!(
            participant_id,
            score = outcome.score,
            total = outcome.total,
            "quiz finished"
        );
        Ok(outcome)
    }

    /// Reorder the participants by score and return them.
    pub fn rank_participants(
        &mut self,
        algorithm: SortAlgorithm,
        direction: Direction,
    ) -> &[Participant] {
        algorithm.sort(self.participants.as_mut_slice(), direction);
        self.participants.as_slice()
    }
}
