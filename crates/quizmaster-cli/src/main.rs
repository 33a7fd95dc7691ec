//! quizmaster CLI: the interactive console quiz manager.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizmaster_core::config::load_config_from;
use quizmaster_core::QuizSystem;

mod commands;
mod console;
mod menu;

use console::Console;

#[derive(Parser)]
#[command(name = "quizmaster", version, about = "Interactive console quiz manager")]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML question bank to load at startup
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Start without the built-in sample questions
    #[arg(long)]
    no_samples: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizmaster=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config_from(cli.config.as_deref())?;
    if cli.no_samples {
        config.load_sample_questions = false;
    }
    if let Some(path) = cli.questions {
        config.question_bank = Some(path);
    }

    let mut system = QuizSystem::from_config(&config)?;
    tracing::info!(questions = system.questions.len(), "quiz system ready");

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    menu::run(&mut system, &mut console)
}
