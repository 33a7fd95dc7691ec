//! Line-based console prompts.
//!
//! Generic over the reader and writer so the menu can be driven from a byte
//! buffer in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use quizmaster_core::{AnswerSource, Choice, Question, QuizError, CHOICE_COUNT};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print `label` and read one line, without its line ending.
    ///
    /// A closed input stream is an `UnexpectedEof` error.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until the line parses as `T`.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> io::Result<T> {
        loop {
            let raw = self.prompt(label)?;
            match raw.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(format!("'{raw}' is not a valid number, try again."))?,
            }
        }
    }

    /// Prompt for the four answer choices in order.
    pub fn prompt_choices(&mut self) -> io::Result<[String; CHOICE_COUNT]> {
        let mut choices: [String; CHOICE_COUNT] = Default::default();
        for (i, choice) in choices.iter_mut().enumerate() {
            *choice = self.prompt(&format!("Choice {}: ", i + 1))?;
        }
        Ok(choices)
    }
}

impl<R: BufRead, W: Write> AnswerSource for Console<R, W> {
    fn answer(
        &mut self,
        number: usize,
        total: usize,
        question: &Question,
    ) -> Result<Choice, QuizError> {
        self.say(format!("\nQuestion {number}/{total}: {}", question.content))?;
        for (i, choice) in question.choices.iter().enumerate() {
            self.say(format!("{}. {choice}", i + 1))?;
        }
        loop {
            let selected: i64 = self.prompt_number("Answer: ")?;
            match Choice::new(selected) {
                Ok(choice) => return Ok(choice),
                Err(e) => self.say(format!("Invalid answer: {e}"))?,
            }
        }
    }
}
