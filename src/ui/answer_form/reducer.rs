use crate::content::{EmotionSelection, EmotionTag};
use crate::mvi::Reducer;
use crate::ui::answer_form::intent::AnswerFormIntent;
use crate::ui::answer_form::state::{AnswerFormState, FormSlot, SLOT_COUNT};

pub struct AnswerFormReducer;

impl Reducer for AnswerFormReducer {
    type State = AnswerFormState;
    type Intent = AnswerFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AnswerFormIntent::Reset => AnswerFormState::default(),
            AnswerFormIntent::Prefill { emotions, verdict } => AnswerFormState {
                focused: 0,
                emotions: Some(emotions),
                verdict: Some(verdict),
            },
            AnswerFormIntent::MoveUp => AnswerFormState {
                focused: if state.focused == 0 {
                    SLOT_COUNT - 1
                } else {
                    state.focused - 1
                },
                ..state
            },
            AnswerFormIntent::MoveDown => AnswerFormState {
                focused: if state.focused + 1 >= SLOT_COUNT {
                    0
                } else {
                    state.focused + 1
                },
                ..state
            },
            AnswerFormIntent::Activate => match state.focused_slot() {
                Some(FormSlot::Emotion(tag)) => toggle(state, tag),
                Some(FormSlot::Verdict(verdict)) => AnswerFormState {
                    verdict: Some(verdict),
                    ..state
                },
                None => state,
            },
            AnswerFormIntent::ToggleEmotion(tag) => toggle(state, tag),
            AnswerFormIntent::SelectVerdict(verdict) => AnswerFormState {
                verdict: Some(verdict),
                ..state
            },
        }
    }
}

fn toggle(state: AnswerFormState, tag: EmotionTag) -> AnswerFormState {
    AnswerFormState {
        emotions: EmotionSelection::toggle(state.emotions, tag),
        ..state
    }
}
