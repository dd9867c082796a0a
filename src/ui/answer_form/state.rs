use crate::content::{EmotionSelection, EmotionTag, Verdict};
use crate::mvi::UiState;

/// Six emotion chips followed by the two verdict buttons.
pub const SLOT_COUNT: usize = EmotionTag::ALL.len() + Verdict::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Emotion(EmotionTag),
    Verdict(Verdict),
}

impl FormSlot {
    pub fn at(index: usize) -> Option<Self> {
        let emotions = EmotionTag::ALL.len();
        if index < emotions {
            Some(FormSlot::Emotion(EmotionTag::ALL[index]))
        } else {
            Verdict::ALL.get(index - emotions).copied().map(FormSlot::Verdict)
        }
    }
}

/// Selections on the question screen before they are submitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnswerFormState {
    pub focused: usize,
    pub emotions: Option<EmotionSelection>,
    pub verdict: Option<Verdict>,
}

impl UiState for AnswerFormState {}

impl AnswerFormState {
    pub fn focused_slot(&self) -> Option<FormSlot> {
        FormSlot::at(self.focused)
    }

    pub fn is_selected(&self, slot: FormSlot) -> bool {
        match slot {
            FormSlot::Emotion(tag) => self.emotions.is_some_and(|sel| sel.contains(tag)),
            FormSlot::Verdict(verdict) => self.verdict == Some(verdict),
        }
    }

    /// Both an emotion and a verdict are picked.
    pub fn submission(&self) -> Option<(EmotionSelection, Verdict)> {
        Some((self.emotions?, self.verdict?))
    }

    pub fn can_submit(&self) -> bool {
        self.submission().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_emotions_then_verdicts() {
        assert_eq!(SLOT_COUNT, 8);
        assert_eq!(FormSlot::at(0), Some(FormSlot::Emotion(EmotionTag::Fear)));
        assert_eq!(FormSlot::at(5), Some(FormSlot::Emotion(EmotionTag::Safe)));
        assert_eq!(FormSlot::at(6), Some(FormSlot::Verdict(Verdict::Trust)));
        assert_eq!(FormSlot::at(7), Some(FormSlot::Verdict(Verdict::Trap)));
        assert_eq!(FormSlot::at(8), None);
    }

    #[test]
    fn submission_needs_both_parts() {
        let mut state = AnswerFormState::default();
        assert!(!state.can_submit());
        state.verdict = Some(Verdict::Trap);
        assert!(!state.can_submit());
        state.emotions = Some(EmotionSelection::single(EmotionTag::Greed));
        assert!(state.can_submit());
    }
}
