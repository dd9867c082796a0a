use crate::content::{EmotionSelection, EmotionTag, Verdict};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AnswerFormIntent {
    /// Clear picks and focus the first chip.
    Reset,
    /// Load an existing answer for editing.
    Prefill {
        emotions: EmotionSelection,
        verdict: Verdict,
    },
    MoveUp,
    MoveDown,
    /// Activate the focused slot: toggle its emotion or pick its verdict.
    Activate,
    ToggleEmotion(EmotionTag),
    SelectVerdict(Verdict),
}

impl Intent for AnswerFormIntent {}
