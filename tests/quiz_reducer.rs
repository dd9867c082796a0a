mod common;

use common::*;
use trapwise::content::{EmotionSelection, EmotionTag, Verdict};
use trapwise::mvi::Reducer;
use trapwise::session::{Phase, PhaseKind, QuizIntent, QuizReducer, QuizState};

fn catalog_order_state() -> QuizState {
    let catalog = builtin();
    let order = (0..catalog.len()).collect();
    QuizState::new(catalog, order)
}

fn submit(verdict: Verdict) -> QuizIntent {
    QuizIntent::SubmitAnswer {
        emotions: EmotionSelection::single(EmotionTag::Urgency),
        verdict,
    }
}

fn to_playing() -> Vec<QuizIntent> {
    vec![
        QuizIntent::Start,
        QuizIntent::ContinueToInstructions,
        QuizIntent::BeginPlaying,
    ]
}

#[test]
fn intro_phases_in_order() {
    let state = catalog_order_state();
    assert_eq!(state.kind(), PhaseKind::Welcome);
    let state = QuizReducer::reduce(state, QuizIntent::Start);
    assert_eq!(state.kind(), PhaseKind::Tutorial);
    let state = QuizReducer::reduce(state, QuizIntent::ContinueToInstructions);
    assert_eq!(state.kind(), PhaseKind::Instructions);
    let state = QuizReducer::reduce(state, QuizIntent::BeginPlaying);
    assert_eq!(state.kind(), PhaseKind::Playing);
    assert_eq!(state.index(), 0);
    assert!(state.answers().is_empty());
}

#[test]
fn skipping_intro_phases_is_ignored() {
    let state = QuizReducer::reduce_all(
        catalog_order_state(),
        vec![QuizIntent::BeginPlaying, QuizIntent::ContinueToInstructions],
    );
    assert_eq!(state.kind(), PhaseKind::Welcome);
}

#[test]
fn feedback_carries_graded_answer() {
    let mut intents = to_playing();
    // Catalog order: the first built-in question is a TRAP
    intents.push(submit(Verdict::Trust));
    let state = QuizReducer::reduce_all(catalog_order_state(), intents);

    let Phase::Feedback { answer, .. } = state.phase() else {
        panic!("Expected Feedback, got {:?}", state.phase());
    };
    assert!(!answer.correct);
    assert_eq!(answer.verdict, Verdict::Trust);
    assert_eq!(answer.correct_verdict, Verdict::Trap);
    assert_eq!(Some(answer), state.answers().last());
}

#[test]
fn advance_from_last_feedback_finishes() {
    let mut intents = to_playing();
    for _ in 0..15 {
        intents.push(submit(Verdict::Trap));
        intents.push(QuizIntent::AdvanceOrFinish);
    }
    let state = QuizReducer::reduce_all(catalog_order_state(), intents);
    assert_eq!(state.kind(), PhaseKind::Results);
    assert_eq!(state.answers().len(), 15);
    assert_eq!(state.index(), 14);

    // Results ignores play operations
    let before = state.clone();
    let state = QuizReducer::reduce_all(
        state,
        vec![
            submit(Verdict::Trap),
            QuizIntent::AdvanceOrFinish,
            QuizIntent::GoBackFromFeedback,
        ],
    );
    assert_eq!(state, before);
}

#[test]
fn resubmit_on_fresh_feedback_is_ignored() {
    let mut intents = to_playing();
    intents.push(submit(Verdict::Trust));
    let state = QuizReducer::reduce_all(catalog_order_state(), intents);
    let before = state.clone();

    let state = QuizReducer::reduce(state, submit(Verdict::Trap));
    assert_eq!(state, before);
    assert!(!state.answers()[0].correct);
}

#[test]
fn resubmit_on_revisited_feedback_replaces_answer() {
    let mut intents = to_playing();
    intents.push(submit(Verdict::Trust));
    intents.push(QuizIntent::AdvanceOrFinish);
    intents.push(QuizIntent::GoBackFromPlaying);
    intents.push(submit(Verdict::Trap));
    let state = QuizReducer::reduce_all(catalog_order_state(), intents);
    assert_eq!(state.index(), 0);
    assert_eq!(state.answers().len(), 1);
    assert!(state.answers()[0].correct);
}

#[test]
fn go_back_from_feedback_pops_newest_answer() {
    let mut intents = to_playing();
    intents.push(submit(Verdict::Trust));
    intents.push(QuizIntent::AdvanceOrFinish);
    intents.push(submit(Verdict::Trap));
    intents.push(QuizIntent::GoBackFromFeedback);
    let state = QuizReducer::reduce_all(catalog_order_state(), intents);

    assert_eq!(state.index(), 0);
    assert_eq!(state.answers().len(), 1);
    assert_eq!(
        state.phase(),
        &Phase::Feedback {
            answer: state.answers()[0].clone(),
            revisit: true,
        }
    );
}

#[test]
fn review_requires_mistakes() {
    let mut intents = to_playing();
    for _ in 0..15 {
        intents.push(submit(Verdict::Trap));
        intents.push(QuizIntent::AdvanceOrFinish);
    }
    let state = QuizReducer::reduce_all(catalog_order_state(), intents);
    // Four TRUST messages answered TRAP
    assert_eq!(state.mistakes().len(), 4);

    let state = QuizReducer::reduce(state, QuizIntent::ReviewMistakes);
    assert_eq!(state.phase(), &Phase::Review { cursor: 0 });
    assert_eq!(
        state.review_question().map(|q| q.verdict),
        Some(Verdict::Trust)
    );

    let state = QuizReducer::reduce_all(
        state,
        vec![
            QuizIntent::NextReview,
            QuizIntent::NextReview,
            QuizIntent::NextReview,
        ],
    );
    assert_eq!(state.review_cursor(), Some(3));
    let state = QuizReducer::reduce(state, QuizIntent::NextReview);
    assert_eq!(state.kind(), PhaseKind::Results);
}

#[test]
fn play_again_installs_new_order() {
    let mut intents = to_playing();
    for _ in 0..15 {
        intents.push(submit(Verdict::Trap));
        intents.push(QuizIntent::AdvanceOrFinish);
    }
    let reversed: Vec<usize> = (0..15).rev().collect();
    intents.push(QuizIntent::PlayAgain {
        order: reversed.clone(),
    });
    let state = QuizReducer::reduce_all(catalog_order_state(), intents);

    assert_eq!(state.kind(), PhaseKind::Welcome);
    assert_eq!(state.order(), reversed.as_slice());
    assert!(state.answers().is_empty());
    assert_eq!(state.index(), 0);
}
