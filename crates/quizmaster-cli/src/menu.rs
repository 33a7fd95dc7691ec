//! The numbered menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;

use quizmaster_core::QuizSystem;

use crate::commands;
use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    AddQuestion,
    EditQuestion,
    DeleteQuestion,
    RegisterParticipant,
    TakeQuiz,
    RankParticipants,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::AddQuestion,
        MenuItem::EditQuestion,
        MenuItem::DeleteQuestion,
        MenuItem::RegisterParticipant,
        MenuItem::TakeQuiz,
        MenuItem::RankParticipants,
        MenuItem::Exit,
    ];

    fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            MenuItem::AddQuestion => "Add question",
            MenuItem::EditQuestion => "Edit question",
            MenuItem::DeleteQuestion => "Delete question",
            MenuItem::RegisterParticipant => "Register participant",
            MenuItem::TakeQuiz => "Take quiz",
            MenuItem::RankParticipants => "Show participants by score",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Run the menu until the operator picks Exit.
///
/// Returns an error only when input or output fails.
pub fn run<R: BufRead, W: Write>(
    system: &mut QuizSystem,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        console.say("\nMenu:")?;
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            console.say(format!("{}. {}", i + 1, item.label()))?;
        }

        let selection = console.prompt("Choose an option: ")?;
        let Some(item) = MenuItem::parse(&selection) else {
            console.say("Invalid choice!")?;
            continue;
        };
        tracing::debug!(?item, "menu selection");

        match item {
            MenuItem::AddQuestion => commands::add_question::execute(system, console)?,
            MenuItem::EditQuestion => commands::edit_question::execute(system, console)?,
            MenuItem::DeleteQuestion => commands::delete_question::execute(system, console)?,
            MenuItem::RegisterParticipant => commands::register::execute(system, console)?,
            MenuItem::TakeQuiz => commands::take_quiz::execute(system, console)?,
            MenuItem::RankParticipants => commands::rank::execute(system, console)?,
            MenuItem::Exit => {
                console.say("Goodbye!")?;
                return Ok(());
            }
        }
    }
}
