//! Menu 5: administer a quiz.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizmaster_core::QuizSystem;

use crate::console::Console;

pub fn execute<R: BufRead, W: Write>(
    system: &mut QuizSystem,
    console: &mut Console<R, W>,
) -> Result<()> {
    let participant_id: u32 = console.prompt_number("Participant ID: ")?;
    if system.participants.find(participant_id).is_err() {
        console.say("Participant not found!")?;
        return Ok(());
    }
    let count: usize = console.prompt_number("Number of questions: ")?;

    // Fresh seed for every quiz.
    let mut rng = StdRng::from_entropy();
    match system.take_quiz(participant_id, count, &mut rng, &mut *console) {
        Ok(outcome) => {
            console.say(format!("\nFinal score: {}/{}", outcome.score, outcome.total))?
        }
        Err(e) if e.is_not_found() => console.say("Participant not found!")?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
