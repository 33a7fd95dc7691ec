//! Menu 4: register a participant.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizmaster_core::QuizSystem;

use crate::console::Console;

pub fn execute<R: BufRead, W: Write>(
    system: &mut QuizSystem,
    console: &mut Console<R, W>,
) -> Result<()> {
    let name = console.prompt("Participant name: ")?;
    let id = system.participants.register(name);
    console.say(format!("Registered participant #{id}."))?;
    Ok(())
}
