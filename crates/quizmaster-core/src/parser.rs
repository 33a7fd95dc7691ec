//! TOML question bank parser.
//!
//! A bank is a list of `[[questions]]` tables, each with `content`, exactly
//! four `choices`, and the literal `answer` text:
//!
//! ```toml
//! [[questions]]
//! content = "What is the capital of Indonesia?"
//! choices = ["Jakarta", "Bandung", "Surabaya", "Yogyakarta"]
//! answer = "Jakarta"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::CHOICE_COUNT;

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    content: String,
    choices: Vec<String>,
    answer: String,
}

/// A question as written in a bank, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankQuestion {
    pub content: String,
    pub choices: [String; CHOICE_COUNT],
    pub answer: String,
}

/// An ordered list of questions ready to be loaded into a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    pub questions: Vec<BankQuestion>,
}

impl QuestionBank {
    /// The built-in sample bank.
    pub fn sample() -> Result<Self> {
        parse_question_bank_str(SAMPLE_QUESTION_BANK, Path::new("<sample>"))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Parse a TOML file into a `QuestionBank`.
pub fn parse_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_question_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank`.
pub fn parse_question_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            let found = q.choices.len();
            let choices: [String; CHOICE_COUNT] = q.choices.try_into().map_err(|_| {
                anyhow::anyhow!(
                    "{}: question {} (\"{}\") has {} choices, expected {}",
                    source_path.display(),
                    i + 1,
                    q.content,
                    found,
                    CHOICE_COUNT
                )
            })?;
            Ok(BankQuestion {
                content: q.content,
                choices,
                answer: q.answer,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank { questions })
}

/// Ten general-knowledge questions about Indonesia, loaded at startup unless
/// disabled.
pub const SAMPLE_QUESTION_BANK: &str = r#"
[[questions]]
content = "What is the capital of Indonesia?"
choices = ["Jakarta", "Bandung", "Surabaya", "Yogyakarta"]
answer = "Jakarta"

[[questions]]
content = "Who was the first president of Indonesia?"
choices = ["Sukarno", "Suharto", "Habibie", "Megawati"]
answer = "Sukarno"

[[questions]]
content = "How many provinces does Indonesia have?"
choices = ["34", "33", "32", "35"]
answer = "34"

[[questions]]
content = "What is the highest mountain in Indonesia?"
choices = ["Semeru", "Rinjani", "Jayawijaya", "Slamet"]
answer = "Jayawijaya"

[[questions]]
content = "What is the longest river in Indonesia?"
choices = ["Mahakam", "Kapuas", "Barito", "Brantas"]
answer = "Kapuas"

[[questions]]
content = "What is the official language of Indonesia?"
choices = ["Javanese", "Sundanese", "Malay", "Indonesian"]
answer = "Indonesian"

[[questions]]
content = "Where is Borobudur Temple located?"
choices = ["East Java", "Central Java", "Yogyakarta", "Bali"]
answer = "Central Java"

[[questions]]
content = "What is the largest lake in Indonesia?"
choices = ["Lake Toba", "Lake Maninjau", "Lake Singkarak", "Lake Sentani"]
answer = "Lake Toba"

[[questions]]
content = "What is the largest island in Indonesia?"
choices = ["Sumatra", "Kalimantan", "Sulawesi", "Papua"]
answer = "Kalimantan"

[[questions]]
content = "Which national hero is known for the motto 'Freedom or Death'?"
choices = ["Diponegoro", "Sudirman", "Bung Tomo", "Pattimura"]
answer = "Pattimura"
"#;
