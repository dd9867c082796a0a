use crate::session::Phase;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{content_column, layout_regions};
use crate::ui::screens::{
    render_answer_form, render_feedback, render_instructions, render_question, render_results,
    render_review, render_tutorial, render_welcome, CONTENT_WIDTH,
};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let session = app.session();

    frame.render_widget(Header::new().widget(session), header);
    frame.render_widget(Clear, body);

    match session.phase() {
        Phase::Welcome => render_welcome(frame, body, session.total()),
        Phase::Tutorial => render_tutorial(frame, body),
        Phase::Instructions => render_instructions(frame, body),
        Phase::Playing => {
            if let Some(question) = session.active_question() {
                render_question(frame, body, question, session.progress(), app.form());
            }
        }
        Phase::Feedback { .. } => {
            if let Some(view) = session.feedback_view() {
                render_feedback(frame, body, &view);
            }
            if app.is_editing() {
                let overlay = edit_overlay(body);
                frame.render_widget(Clear, overlay);
                render_answer_form(frame, overlay, app.form());
            }
        }
        Phase::Results => render_results(frame, body, &session.summary()),
        Phase::Review { .. } => {
            if let Some(view) = session.review_view() {
                render_review(frame, body, &view);
            }
        }
    }

    frame.render_widget(Footer::new(app), footer);
}

/// Bottom of the content column, tall enough for the answer form.
fn edit_overlay(body: Rect) -> Rect {
    let column = content_column(body, CONTENT_WIDTH);
    let height = column.height.min(12);
    Rect {
        y: column.y + column.height - height,
        height,
        ..column
    }
}
