//! One module per menu command.

use std::io::{self, BufRead, Write};

use quizmaster_core::CHOICE_COUNT;

use crate::console::Console;

pub mod add_question;
pub mod delete_question;
pub mod edit_question;
pub mod rank;
pub mod register;
pub mod take_quiz;

/// The fields an operator types in for a new or edited question.
struct QuestionForm {
    content: String,
    choices: [String; CHOICE_COUNT],
    answer: String,
}

fn read_question_form<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    content_label: &str,
    answer_label: &str,
) -> io::Result<QuestionForm> {
    let content = console.prompt(content_label)?;
    let choices = console.prompt_choices()?;
    let answer = console.prompt(answer_label)?;
    Ok(QuestionForm {
        content,
        choices,
        answer,
    })
}
