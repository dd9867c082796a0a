//! Every phase renders into a test terminal.

mod common;

use common::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use trapwise::session::{PhaseKind, QuizSession};
use trapwise::ui::app::App;
use trapwise::ui::render::draw;

fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn welcome_shows_title() {
    let app = make_app(31);
    assert!(render(&app, 100, 40).contains("Trust or Trap"));
}

#[test]
fn every_phase_renders() {
    let mut app = make_app(32);
    app.navigate(QuizSession::start);
    assert!(render(&app, 100, 40).contains("How scammers use emotions"));
    app.navigate(QuizSession::continue_to_instructions);
    render(&app, 100, 40);
    app.navigate(QuizSession::begin_playing);
    assert!(render(&app, 100, 40).contains("Question 1 of 15"));

    app.navigate(|session| answer_current(session, false));
    assert!(render(&app, 100, 40).contains("Incorrect"));

    app.navigate(|session| {
        session.advance_or_finish();
        session.go_back_from_playing();
    });
    app.begin_edit();
    assert!(app.is_editing());
    render(&app, 100, 40);
    app.cancel_edit();

    app.navigate(|session| {
        session.advance_or_finish();
        while session.kind() == PhaseKind::Playing {
            answer_current(session, true);
            session.advance_or_finish();
        }
    });
    assert!(render(&app, 100, 40).contains("Score 14/15"));

    app.navigate(QuizSession::review_mistakes);
    assert!(render(&app, 100, 40).contains("Reviewing mistake 1 of 1"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut session = playing_session(33);
    answer_current(&mut session, true);
    let app = App::new(session);
    render(&app, 20, 6);
    render(&app, 1, 1);
}
