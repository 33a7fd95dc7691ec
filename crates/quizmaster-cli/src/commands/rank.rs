//! Menu 6: rank and print participants.

use std::io::{BufRead, Write};

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizmaster_core::{Direction, QuizSystem, SortAlgorithm};

use crate::console::Console;

pub fn execute<R: BufRead, W: Write>(
    system: &mut QuizSystem,
    console: &mut Console<R, W>,
) -> Result<()> {
    let direction = loop {
        let order: u32 = console.prompt_number("Sort (1) ascending or (2) descending: ")?;
        match order {
            1 => break Direction::Ascending,
            2 => break Direction::Descending,
            _ => console.say("Please enter 1 or 2.")?,
        }
    };
    let name = console.prompt("Sorting algorithm (default, insertion, selection): ")?;
    let algorithm = SortAlgorithm::from_name(&name);
    if algorithm == SortAlgorithm::Default && !name.eq_ignore_ascii_case("default") {
        tracing::debug!("unknown algorithm '{name}', using default");
    }

    let ranked = system.rank_participants(algorithm, direction);
    if ranked.is_empty() {
        console.say("No participants registered.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Score"]);
    for p in ranked {
        table.add_row(vec![
            Cell::new(p.id),
            Cell::new(&p.name),
            Cell::new(p.score),
        ]);
    }
    console.say(table)?;
    Ok(())
}
