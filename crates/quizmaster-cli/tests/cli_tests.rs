//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizmaster() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizmaster").unwrap();
    cmd.env_remove("QUIZMASTER_QUESTION_BANK");
    cmd
}

const SINGLE_QUESTION_BANK: &str = r#"
[[questions]]
content = "Which planet is closest to the sun?"
choices = ["Venus", "Mercury", "Mars", "Earth"]
answer = "Mercury"
"#;

fn write_bank(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("bank.toml");
    std::fs::write(&path, SINGLE_QUESTION_BANK).unwrap();
    path
}

#[test]
fn exit_immediately() {
    quizmaster()
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add question"))
        .stdout(predicate::str::contains("7. Exit"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn invalid_choice_keeps_running() {
    quizmaster()
        .write_stdin("42\nabc\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice!").count(2));
}

#[test]
fn closed_stdin_fails() {
    quizmaster()
        .write_stdin("4\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn sample_questions_are_loaded() {
    // Questions 1-10 come from the sample bank, so a new one gets id 11.
    quizmaster()
        .write_stdin("1\nNew question\na\nb\nc\nd\na\n3\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added question #11."))
        .stdout(predicate::str::contains("Deleted question #1."));
}

#[test]
fn no_samples_starts_empty() {
    quizmaster()
        .arg("--no-samples")
        .write_stdin("3\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question not found!"));
}

#[test]
fn quiz_from_question_bank() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    quizmaster()
        .arg("--no-samples")
        .arg("--questions")
        .arg(&bank)
        .write_stdin("4\nAyu\n5\n1\n5\n2\n6\n2\ninsertion\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1/1: Which planet is closest to the sun?"))
        .stdout(predicate::str::contains("Final score: 1/1"))
        .stdout(predicate::str::contains("Ayu"));
}

#[test]
fn out_of_range_answer_is_reported() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    quizmaster()
        .arg("--no-samples")
        .arg("--questions")
        .arg(&bank)
        .write_stdin("4\nBudi\n5\n1\n1\n9\nx\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid answer"))
        .stdout(predicate::str::contains("'x' is not a valid number"))
        .stdout(predicate::str::contains("Final score: 0/1"));
}

#[test]
fn unknown_participant_is_reported() {
    quizmaster()
        .write_stdin("5\n3\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Participant not found!"));
}

#[test]
fn config_file_disables_samples() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);
    let config = dir.path().join("quizmaster.toml");
    std::fs::write(
        &config,
        format!(
            "load_sample_questions = false\nquestion_bank = {:?}\n",
            bank.display().to_string()
        ),
    )
    .unwrap();

    quizmaster()
        .arg("--config")
        .arg(&config)
        .write_stdin("1\nAnother\na\nb\nc\nd\nd\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added question #2."));
}

#[test]
fn missing_config_file_fails() {
    quizmaster()
        .arg("--config")
        .arg("no_such_config.toml")
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn malformed_question_bank_fails() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("bad.toml");
    std::fs::write(
        &bank,
        "[[questions]]\ncontent = \"Short\"\nchoices = [\"a\"]\nanswer = \"a\"\n",
    )
    .unwrap();

    quizmaster()
        .arg("--questions")
        .arg(&bank)
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has 1 choices"));
}

#[test]
fn help_output() {
    quizmaster()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive console quiz manager"));
}

#[test]
fn version_output() {
    quizmaster()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizmaster"));
}
