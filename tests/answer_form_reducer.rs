use trapwise::content::{EmotionSelection, EmotionTag, Verdict};
use trapwise::mvi::Reducer;
use trapwise::ui::answer_form::{
    AnswerFormIntent, AnswerFormReducer, AnswerFormState, FormSlot, SLOT_COUNT,
};

fn reduce(state: AnswerFormState, intent: AnswerFormIntent) -> AnswerFormState {
    AnswerFormReducer::reduce(state, intent)
}

#[test]
fn toggle_adds_and_removes() {
    let state = reduce(
        AnswerFormState::default(),
        AnswerFormIntent::ToggleEmotion(EmotionTag::Fear),
    );
    assert_eq!(state.emotions, Some(EmotionSelection::single(EmotionTag::Fear)));

    let state = reduce(state, AnswerFormIntent::ToggleEmotion(EmotionTag::Fear));
    assert_eq!(state.emotions, None);
}

#[test]
fn third_pick_drops_the_oldest() {
    let state = [EmotionTag::Fear, EmotionTag::Greed, EmotionTag::Safe]
        .into_iter()
        .fold(AnswerFormState::default(), |state, tag| {
            reduce(state, AnswerFormIntent::ToggleEmotion(tag))
        });
    assert_eq!(
        state.emotions,
        EmotionSelection::pair(EmotionTag::Greed, EmotionTag::Safe)
    );
    assert!(!state.is_selected(FormSlot::Emotion(EmotionTag::Fear)));
}

#[test]
fn focus_wraps_both_ways() {
    let state = reduce(AnswerFormState::default(), AnswerFormIntent::MoveUp);
    assert_eq!(state.focused, SLOT_COUNT - 1);
    let state = reduce(state, AnswerFormIntent::MoveDown);
    assert_eq!(state.focused, 0);
}

#[test]
fn activate_follows_focus() {
    let state = reduce(AnswerFormState::default(), AnswerFormIntent::Activate);
    assert!(state.is_selected(FormSlot::Emotion(EmotionTag::Fear)));

    // Last slot is the TRAP button
    let state = reduce(state, AnswerFormIntent::MoveUp);
    assert_eq!(state.focused_slot(), Some(FormSlot::Verdict(Verdict::Trap)));
    let state = reduce(state, AnswerFormIntent::Activate);
    assert_eq!(state.verdict, Some(Verdict::Trap));
    assert!(state.can_submit());
}

#[test]
fn verdict_selection_is_exclusive() {
    let state = reduce(
        AnswerFormState::default(),
        AnswerFormIntent::SelectVerdict(Verdict::Trust),
    );
    let state = reduce(state, AnswerFormIntent::SelectVerdict(Verdict::Trap));
    assert!(state.is_selected(FormSlot::Verdict(Verdict::Trap)));
    assert!(!state.is_selected(FormSlot::Verdict(Verdict::Trust)));
}

#[test]
fn prefill_then_reset() {
    let emotions = EmotionSelection::pair(EmotionTag::Authority, EmotionTag::Urgency).unwrap();
    let state = reduce(
        AnswerFormState {
            focused: 4,
            ..AnswerFormState::default()
        },
        AnswerFormIntent::Prefill {
            emotions,
            verdict: Verdict::Trust,
        },
    );
    assert_eq!(state.submission(), Some((emotions, Verdict::Trust)));
    assert_eq!(state.focused, 0);

    let state = reduce(state, AnswerFormIntent::Reset);
    assert_eq!(state, AnswerFormState::default());
}
