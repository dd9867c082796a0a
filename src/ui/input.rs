use crate::content::{EmotionTag, Verdict};
use crate::session::{PhaseKind, QuizSession};
use crate::ui::answer_form::AnswerFormIntent;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.form_active() {
        handle_form_key(app, key);
        return;
    }

    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match app.session().kind() {
        PhaseKind::Welcome => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('h')) {
                app.navigate(QuizSession::start);
            }
        }
        PhaseKind::Tutorial => {
            if is_forward(key) {
                app.navigate(QuizSession::continue_to_instructions);
            }
        }
        PhaseKind::Instructions => {
            if is_forward(key) {
                app.navigate(QuizSession::begin_playing);
            }
        }
        PhaseKind::Playing => {}
        PhaseKind::Feedback => {
            if is_forward(key) {
                app.navigate(QuizSession::advance_or_finish);
            } else if is_back(key) {
                app.navigate(QuizSession::go_back_from_feedback);
            } else if key.code == KeyCode::Char('e') {
                app.begin_edit();
            }
        }
        PhaseKind::Results => match key.code {
            KeyCode::Char('r') => app.navigate(QuizSession::review_mistakes),
            KeyCode::Char('p') | KeyCode::Enter => app.navigate(QuizSession::play_again),
            _ => {}
        },
        PhaseKind::Review => {
            if is_forward(key) {
                app.navigate(QuizSession::next_review);
            } else if is_back(key) {
                app.navigate(QuizSession::back_review);
            }
        }
    }
}

/// Keys on the question screen and on the edit form.
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::BackTab => app.dispatch_form(AnswerFormIntent::MoveUp),
        KeyCode::Down | KeyCode::Tab => app.dispatch_form(AnswerFormIntent::MoveDown),
        KeyCode::Char(' ') => app.dispatch_form(AnswerFormIntent::Activate),
        KeyCode::Char('t') => app.dispatch_form(AnswerFormIntent::SelectVerdict(Verdict::Trust)),
        KeyCode::Char('x') => app.dispatch_form(AnswerFormIntent::SelectVerdict(Verdict::Trap)),
        KeyCode::Char(ch @ '1'..='6') => {
            let slot = ch.to_digit(10).unwrap_or(1) as usize - 1;
            if let Some(tag) = EmotionTag::ALL.get(slot) {
                app.dispatch_form(AnswerFormIntent::ToggleEmotion(*tag));
            }
        }
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Esc if app.is_editing() => app.cancel_edit(),
        KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
        KeyCode::Left | KeyCode::Backspace if !app.is_editing() => {
            app.navigate(QuizSession::go_back_from_playing);
        }
        _ => {}
    }
}

fn is_forward(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Right | KeyCode::Char('n'))
}

fn is_back(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b'))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
