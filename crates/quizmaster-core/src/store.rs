//! In-memory question and participant stores.
//!
//! Both stores keep records in insertion order and hand out identifiers from
//! a counter that only moves forward, so a deleted identifier is never
//! reissued.

use crate::error::QuizError;
use crate::model::{Participant, Question, CHOICE_COUNT};

/// Ordered collection of questions.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
    next_id: u32,
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            next_id: 1,
        }
    }
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a question and return its identifier.
    pub fn add(
        &mut self,
        content: impl Into<String>,
        choices: [String; CHOICE_COUNT],
        answer: impl Into<String>,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.questions.push(Question {
            id,
            content: content.into(),
            choices,
            answer: answer.into(),
            correct_count: 0,
            incorrect_count: 0,
        });
        tracing::debug!(id, "question added");
        id
    }

    /// Replace the content, choices and answer of an existing question.
    ///
    /// Answer counters are kept.
    pub fn edit(
        &mut self,
        id: u32,
        content: impl Into<String>,
        choices: [String; CHOICE_COUNT],
        answer: impl Into<String>,
    ) -> Result<(), QuizError> {
        let question = self.get_mut(id).ok_or(QuizError::QuestionNotFound(id))?;
        question.content = content.into();
        question.choices = choices;
        question.answer = answer.into();
        tracing::debug!(id, "question edited");
        Ok(())
    }

    /// Remove a question, keeping the order of the rest.
    pub fn delete(&mut self, id: u32) -> Result<Question, QuizError> {
        let pos = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(QuizError::QuestionNotFound(id))?;
        tracing::debug!(id, "question deleted");
        Ok(self.questions.remove(pos))
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Questions in stored order.
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    /// Mutable view for in-place reordering.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Question] {
        &mut self.questions
    }
}

/// Ordered collection of participants.
#[derive(Debug, Clone)]
pub struct ParticipantStore {
    participants: Vec<Participant>,
    next_id: u32,
}

impl Default for ParticipantStore {
    fn default() -> Self {
        Self {
            participants: Vec::new(),
            next_id: 1,
        }
    }
}

impl ParticipantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a participant with a zero score and return its identifier.
    pub fn register(&mut self, name: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.participants.push(Participant {
            id,
            name: name.into(),
            score: 0,
        });
        tracing::debug!(id, "participant registered");
        id
    }

    pub fn find(&self, id: u32) -> Result<&Participant, QuizError> {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .ok_or(QuizError::ParticipantNotFound(id))
    }

    pub fn find_mut(&mut self, id: u32) -> Result<&mut Participant, QuizError> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(QuizError::ParticipantNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Participant] {
        &mut self.participants
    }
}
