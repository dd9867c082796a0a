//! Intents for the quiz state machine.

use crate::content::{EmotionSelection, Verdict};
use crate::mvi::Intent;

/// One variant per operation the presentation layer may invoke.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizIntent {
    /// Welcome -> Tutorial.
    Start,

    /// Tutorial -> Instructions.
    ContinueToInstructions,

    /// Instructions -> Playing. Resets the index and clears the answer log.
    BeginPlaying,

    /// Grade an answer for the current question and show feedback.
    SubmitAnswer {
        emotions: EmotionSelection,
        verdict: Verdict,
    },

    /// From an unanswered question back to the previous question's feedback.
    GoBackFromPlaying,

    /// Drop the newest answer and show the previous question's feedback.
    GoBackFromFeedback,

    /// Next question, or Results after the last one.
    AdvanceOrFinish,

    /// Results -> Welcome with a freshly shuffled question order.
    PlayAgain {
        /// Catalog positions in the new play order.
        order: Vec<usize>,
    },

    /// Results -> Review, only when at least one answer is wrong.
    ReviewMistakes,

    /// Next mistake, or Results after the last one.
    NextReview,

    /// Previous mistake, or Results before the first one.
    BackReview,
}

impl Intent for QuizIntent {}
