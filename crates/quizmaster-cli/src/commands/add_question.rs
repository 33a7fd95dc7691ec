//! Menu 1: add a question.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizmaster_core::QuizSystem;

use super::read_question_form;
use crate::console::Console;

pub fn execute<R: BufRead, W: Write>(
    system: &mut QuizSystem,
    console: &mut Console<R, W>,
) -> Result<()> {
    let form = read_question_form(console, "Question: ", "Correct answer: ")?;
    let id = system.questions.add(form.content, form.choices, form.answer);
    console.say(format!("Added question #{id}."))?;
    Ok(())
}
