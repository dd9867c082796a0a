//! Reducer for the quiz state machine.

use crate::mvi::Reducer;
use crate::session::answer::Answer;
use crate::session::intent::QuizIntent;
use crate::session::state::{is_permutation, Phase, PhaseKind, QuizState};

/// Phase transitions for a playthrough.
///
/// An intent that does not apply to the current phase leaves the state
/// untouched and is logged at `warn`.
pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let from = state.kind();
        let next = match intent {
            QuizIntent::Start => match from {
                PhaseKind::Welcome => enter(state, Phase::Tutorial),
                _ => ignored(state, "start"),
            },

            QuizIntent::ContinueToInstructions => match from {
                PhaseKind::Tutorial => enter(state, Phase::Instructions),
                _ => ignored(state, "continue_to_instructions"),
            },

            QuizIntent::BeginPlaying => match from {
                PhaseKind::Instructions if state.total() > 0 => {
                    let mut state = state;
                    state.index = 0;
                    state.answers.clear();
                    enter(state, Phase::Playing)
                }
                _ => ignored(state, "begin_playing"),
            },

            QuizIntent::SubmitAnswer { emotions, verdict } => match state.phase {
                Phase::Playing | Phase::Feedback { revisit: true, .. } => {
                    let Some(question) = state.question_at(state.index) else {
                        return ignored(state, "submit_answer");
                    };
                    let answer = Answer::grade(question, emotions, verdict);
                    let mut state = state;
                    // Revising a revisited answer replaces this question's entry.
                    state.answers.truncate(state.index);
                    state.answers.push(answer.clone());
                    enter(
                        state,
                        Phase::Feedback {
                            answer,
                            revisit: false,
                        },
                    )
                }
                _ => ignored(state, "submit_answer"),
            },

            QuizIntent::GoBackFromPlaying => match from {
                PhaseKind::Playing if state.index > 0 => {
                    let mut state = state;
                    state.index -= 1;
                    show_stored_answer(state, "go_back_from_playing")
                }
                _ => ignored(state, "go_back_from_playing"),
            },

            QuizIntent::GoBackFromFeedback => match from {
                PhaseKind::Feedback if state.index > 0 => {
                    let mut state = state;
                    state.answers.truncate(state.index);
                    state.index -= 1;
                    show_stored_answer(state, "go_back_from_feedback")
                }
                _ => ignored(state, "go_back_from_feedback"),
            },

            QuizIntent::AdvanceOrFinish => match from {
                PhaseKind::Feedback if state.is_last_question() => enter(state, Phase::Results),
                PhaseKind::Feedback => {
                    let mut state = state;
                    state.index += 1;
                    enter(state, Phase::Playing)
                }
                _ => ignored(state, "advance_or_finish"),
            },

            QuizIntent::PlayAgain { order } => match from {
                PhaseKind::Results if is_permutation(&order, state.catalog.len()) => {
                    let mut state = state;
                    state.order = order;
                    state.index = 0;
                    state.answers.clear();
                    enter(state, Phase::Welcome)
                }
                _ => ignored(state, "play_again"),
            },

            QuizIntent::ReviewMistakes => match from {
                PhaseKind::Results if !state.mistakes().is_empty() => {
                    enter(state, Phase::Review { cursor: 0 })
                }
                _ => ignored(state, "review_mistakes"),
            },

            QuizIntent::NextReview => match state.phase {
                Phase::Review { cursor } if cursor + 1 < state.mistakes().len() => {
                    enter(state, Phase::Review { cursor: cursor + 1 })
                }
                Phase::Review { .. } => enter(state, Phase::Results),
                _ => ignored(state, "next_review"),
            },

            QuizIntent::BackReview => match state.phase {
                Phase::Review { cursor } if cursor > 0 => {
                    enter(state, Phase::Review { cursor: cursor - 1 })
                }
                Phase::Review { .. } => enter(state, Phase::Results),
                _ => ignored(state, "back_review"),
            },
        };

        if next.kind() != from {
            tracing::debug!(
                from = from.label(),
                to = next.kind().label(),
                index = next.index,
                answers = next.answers.len(),
                "Quiz phase transition"
            );
        }
        next
    }
}

fn enter(mut state: QuizState, phase: Phase) -> QuizState {
    state.phase = phase;
    state
}

/// Feedback for `state.index`, read back from the answer log.
fn show_stored_answer(state: QuizState, operation: &'static str) -> QuizState {
    match state.answers.get(state.index).cloned() {
        Some(answer) => enter(
            state,
            Phase::Feedback {
                answer,
                revisit: true,
            },
        ),
        None => {
            tracing::warn!(operation, index = state.index, "No stored answer to show");
            state
        }
    }
}

fn ignored(state: QuizState, operation: &'static str) -> QuizState {
    tracing::warn!(
        operation,
        phase = state.kind().label(),
        index = state.index,
        "Ignoring quiz operation outside its phase"
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Catalog, EmotionSelection, EmotionTag, Verdict};
    use std::sync::Arc;

    fn playing_state() -> QuizState {
        let catalog = Arc::new(Catalog::builtin());
        let order = (0..catalog.len()).collect();
        let state = QuizState::new(catalog, order);
        let state = QuizReducer::reduce(state, QuizIntent::Start);
        let state = QuizReducer::reduce(state, QuizIntent::ContinueToInstructions);
        QuizReducer::reduce(state, QuizIntent::BeginPlaying)
    }

    fn submit(state: QuizState, verdict: Verdict) -> QuizState {
        QuizReducer::reduce(
            state,
            QuizIntent::SubmitAnswer {
                emotions: EmotionSelection::single(EmotionTag::Fear),
                verdict,
            },
        )
    }

    #[test]
    fn submit_moves_to_feedback_with_answer() {
        let state = submit(playing_state(), Verdict::Trap);
        match state.phase() {
            Phase::Feedback { answer, revisit } => {
                assert!(!revisit);
                assert_eq!(answer.question_id, 1);
                assert!(answer.correct);
            }
            other => panic!("Expected Feedback, got {:?}", other),
        }
        assert_eq!(state.answers().len(), 1);
    }

    #[test]
    fn resubmit_from_fresh_feedback_is_ignored() {
        let state = submit(playing_state(), Verdict::Trust);
        let before = state.clone();
        let state = submit(state, Verdict::Trap);
        assert_eq!(state, before);
        assert!(!state.answers()[0].correct);
    }

    #[test]
    fn revisited_feedback_accepts_a_new_answer() {
        let state = submit(playing_state(), Verdict::Trust);
        let state = QuizReducer::reduce(state, QuizIntent::AdvanceOrFinish);
        let state = submit(state, Verdict::Trap);
        let state = QuizReducer::reduce(state, QuizIntent::GoBackFromFeedback);
        assert!(state.can_revise());

        let state = submit(state, Verdict::Trap);
        assert_eq!(state.answers().len(), 1);
        assert!(state.answers()[0].correct);
        assert!(!state.can_revise());
    }

    #[test]
    fn back_from_first_feedback_is_noop() {
        let state = submit(playing_state(), Verdict::Trap);
        let before = state.clone();
        let state = QuizReducer::reduce(state, QuizIntent::GoBackFromFeedback);
        assert_eq!(state, before);
    }

    #[test]
    fn back_from_first_playing_is_noop() {
        let state = playing_state();
        let before = state.clone();
        let state = QuizReducer::reduce(state, QuizIntent::GoBackFromPlaying);
        assert_eq!(state, before);
    }

    #[test]
    fn submit_outside_play_is_ignored() {
        let catalog = Arc::new(Catalog::builtin());
        let state = QuizState::new(catalog, (0..15).collect());
        let state = submit(state, Verdict::Trap);
        assert_eq!(state.phase(), &Phase::Welcome);
        assert!(state.answers().is_empty());
    }

    #[test]
    fn begin_playing_on_empty_state_is_ignored() {
        let state = QuizState::default();
        let state = QuizReducer::reduce(state, QuizIntent::Start);
        let state = QuizReducer::reduce(state, QuizIntent::ContinueToInstructions);
        let state = QuizReducer::reduce(state, QuizIntent::BeginPlaying);
        assert_eq!(state.kind(), PhaseKind::Instructions);
    }

    #[test]
    fn play_again_rejects_bad_order() {
        let mut state = playing_state();
        state.phase = Phase::Results;
        let state = QuizReducer::reduce(state, QuizIntent::PlayAgain { order: vec![0, 1] });
        assert_eq!(state.kind(), PhaseKind::Results);
    }
}
