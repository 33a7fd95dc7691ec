//! End-to-end flow through the public API: build a question set, run
//! quizzes for several participants and rank them.

use rand::rngs::StdRng;
use rand::SeedableRng;

use quizmaster_core::{Direction, QuizError, QuizSystem, ScriptedAnswers, SortAlgorithm};

/// Every question's correct answer is choice 1, so scripted answers score
/// predictably whatever order the quiz picks.
fn system_with_questions(n: usize) -> QuizSystem {
    let mut system = QuizSystem::new();
    for i in 0..n {
        system.questions.add(
            format!("Question {i}"),
            ["right", "wrong a", "wrong b", "wrong c"].map(String::from),
            "right",
        );
    }
    system
}

#[test]
fn quiz_then_rank() {
    let mut system = system_with_questions(5);
    let ayu = system.participants.register("Ayu");
    let budi = system.participants.register("Budi");
    let citra = system.participants.register("Citra");
    let mut rng = StdRng::seed_from_u64(11);

    let mut answers = ScriptedAnswers::from_numbers(&[1, 1, 2]).unwrap();
    let outcome = system.take_quiz(ayu, 3, &mut rng, &mut answers).unwrap();
    assert_eq!((outcome.score, outcome.total), (2, 3));

    let mut answers = ScriptedAnswers::from_numbers(&[1, 1, 1, 1, 1]).unwrap();
    let outcome = system.take_quiz(budi, 5, &mut rng, &mut answers).unwrap();
    assert_eq!((outcome.score, outcome.total), (5, 5));

    let mut answers = ScriptedAnswers::from_numbers(&[4]).unwrap();
    let outcome = system.take_quiz(citra, 1, &mut rng, &mut answers).unwrap();
    assert_eq!((outcome.score, outcome.total), (0, 1));

    for algorithm in SortAlgorithm::ALL {
        let ids: Vec<u32> = system
            .rank_participants(algorithm, Direction::Descending)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![budi, ayu, citra], "{algorithm}");

        let ids: Vec<u32> = system
            .rank_participants(algorithm, Direction::Ascending)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![citra, ayu, budi], "{algorithm}");
    }
}

#[test]
fn answer_counters_accumulate_across_quizzes() {
    let mut system = system_with_questions(3);
    let id = system.participants.register("Dewi");
    let mut rng = StdRng::seed_from_u64(3);

    let mut answers = ScriptedAnswers::from_numbers(&[1, 1, 1]).unwrap();
    system.take_quiz(id, 3, &mut rng, &mut answers).unwrap();
    let mut answers = ScriptedAnswers::from_numbers(&[2, 2, 2]).unwrap();
    system.take_quiz(id, 3, &mut rng, &mut answers).unwrap();

    for q in system.questions.iter() {
        assert_eq!((q.correct_count, q.incorrect_count), (1, 1), "{}", q.content);
    }
    // Retaking replaces the score.
    assert_eq!(system.participants.find(id).unwrap().score, 0);
}

#[test]
fn oversized_quiz_asks_every_question_once() {
    let mut system = system_with_questions(4);
    let id = system.participants.register("Eka");
    let mut rng = StdRng::seed_from_u64(99);

    let mut answers = ScriptedAnswers::from_numbers(&[1; 4]).unwrap();
    let outcome = system.take_quiz(id, 100, &mut rng, &mut answers).unwrap();
    assert_eq!(outcome.total, 4);

    let mut asked: Vec<u32> = outcome.answers.iter().map(|a| a.question_id).collect();
    asked.sort_unstable();
    assert_eq!(asked, vec![1, 2, 3, 4]);
}

#[test]
fn empty_bank_gives_empty_quiz() {
    let mut system = QuizSystem::new();
    let id = system.participants.register("Fajar");
    system.participants.find_mut(id).unwrap().score = 7;
    let mut rng = StdRng::seed_from_u64(0);

    let mut answers = ScriptedAnswers::new(Vec::new());
    let outcome = system.take_quiz(id, 5, &mut rng, &mut answers).unwrap();
    assert_eq!((outcome.score, outcome.total), (0, 0));
    assert_eq!(system.participants.find(id).unwrap().score, 0);
}

#[test]
fn unknown_participant_is_rejected() {
    let mut system = system_with_questions(2);
    let mut rng = StdRng::seed_from_u64(0);
    let mut answers = ScriptedAnswers::from_numbers(&[1, 1]).unwrap();

    let err = system.take_quiz(42, 2, &mut rng, &mut answers).unwrap_err();
    assert!(matches!(err, QuizError::ParticipantNotFound(42)));
}

#[test]
fn sample_bank_is_playable() {
    let mut system = QuizSystem::with_sample_questions().unwrap();
    assert_eq!(system.questions.len(), 10);
    let id = system.participants.register("Gita");
    let mut rng = StdRng::seed_from_u64(5);

    let mut answers = ScriptedAnswers::from_numbers(&[1, 2, 3]).unwrap();
    let outcome = system.take_quiz(id, 3, &mut rng, &mut answers).unwrap();
    assert_eq!(outcome.total, 3);
    assert!(outcome.score <= 3);
}
