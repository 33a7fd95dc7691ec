//! Menu 2: edit a question.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizmaster_core::QuizSystem;

use super::read_question_form;
use crate::console::Console;

pub fn execute<R: BufRead, W: Write>(
    system: &mut QuizSystem,
    console: &mut Console<R, W>,
) -> Result<()> {
    let id: u32 = console.prompt_number("ID of the question to edit: ")?;
    // Check before asking for six more lines.
    if !system.questions.contains(id) {
        console.say("Question not found!")?;
        return Ok(());
    }

    let form = read_question_form(console, "New question: ", "New correct answer: ")?;
    system
        .questions
        .edit(id, form.content, form.choices, form.answer)?;
    console.say(format!("Updated question #{id}."))?;
    Ok(())
}
