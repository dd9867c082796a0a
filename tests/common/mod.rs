//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use trapwise::content::{Catalog, EmotionSelection, Verdict};
use trapwise::session::{PhaseKind, QuizSession};
use trapwise::ui::app::App;

pub fn builtin() -> Arc<Catalog> {
    Arc::new(Catalog::builtin())
}

/// Seeded session on the welcome screen.
pub fn make_session(seed: u64) -> QuizSession {
    QuizSession::with_seed(builtin(), seed)
}

/// Seeded session on the first question.
pub fn playing_session(seed: u64) -> QuizSession {
    let mut session = make_session(seed);
    session.start();
    session.continue_to_instructions();
    session.begin_playing();
    assert_eq!(session.kind(), PhaseKind::Playing);
    session
}

pub fn make_app(seed: u64) -> App {
    App::new(make_session(seed))
}

pub fn opposite(verdict: Verdict) -> Verdict {
    match verdict {
        Verdict::Trust => Verdict::Trap,
        Verdict::Trap => Verdict::Trust,
    }
}

/// Answers the active question, right or wrong on purpose.
pub fn answer_current(session: &mut QuizSession, correct: bool) {
    let question = session
        .active_question()
        .expect("Expected an active question");
    let emotions = EmotionSelection::single(question.emotions[0]);
    let verdict = if correct {
        question.verdict
    } else {
        opposite(question.verdict)
    };
    session.submit_answer(emotions, verdict);
}

/// Answers every question; `wrong` lists the play positions answered wrong.
pub fn play_through(session: &mut QuizSession, wrong: &[usize]) {
    for position in 0..session.total() {
        assert_eq!(session.index(), position);
        answer_current(session, !wrong.contains(&position));
        session.advance_or_finish();
    }
    assert_eq!(session.kind(), PhaseKind::Results);
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
