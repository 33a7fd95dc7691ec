//! Menu 3: delete a question.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizmaster_core::QuizSystem;

use crate::console::Console;

pub fn execute<R: BufRead, W: Write>(
    system: &mut QuizSystem,
    console: &mut Console<R, W>,
) -> Result<()> {
    let id: u32 = console.prompt_number("ID of the question to delete: ")?;
    match system.questions.delete(id) {
        Ok(_) => console.say(format!("Deleted question #{id}."))?,
        Err(e) if e.is_not_found() => console.say("Question not found!")?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
