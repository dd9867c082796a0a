use crate::session::PhaseKind;
use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), " ");

/// Bottom bar: key hints on the left, version on the right.
pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn new(app: &App) -> Self {
        Self { hints: hints(app) }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let version_width = VERSION.chars().count() as u16;
        let [left, right] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(version_width)])
            .areas(inner);
        Paragraph::new(self.hints).style(style).render(left, buf);
        Paragraph::new(VERSION)
            .style(style)
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

/// Key hints for the current screen.
pub fn hints(app: &App) -> &'static str {
    let session = app.session();
    match session.kind() {
        PhaseKind::Welcome => " Enter: Start │ H: How to play │ Q: Quit",
        PhaseKind::Tutorial | PhaseKind::Instructions => " Enter: Continue │ Q: Quit",
        PhaseKind::Playing if session.index() > 0 => {
            " 1-6/Space: Emotion │ T: Trust │ X: Trap │ Enter: Submit │ ←: Previous │ Esc: Quit"
        }
        PhaseKind::Playing => " 1-6/Space: Emotion │ T: Trust │ X: Trap │ Enter: Submit │ Esc: Quit",
        PhaseKind::Feedback if app.is_editing() => {
            " 1-6/Space: Emotion │ T: Trust │ X: Trap │ Enter: Resubmit │ Esc: Cancel"
        }
        PhaseKind::Feedback => match (session.index() > 0, session.can_revise()) {
            (true, true) => " Enter: Next │ ←: Back │ E: Change answer │ Q: Quit",
            (true, false) => " Enter: Next │ ←: Back │ Q: Quit",
            (false, true) => " Enter: Next │ E: Change answer │ Q: Quit",
            (false, false) => " Enter: Next │ Q: Quit",
        },
        PhaseKind::Results if session.summary().has_mistakes() => {
            " R: Review mistakes │ P: Play again │ Q: Quit"
        }
        PhaseKind::Results => " P: Play again │ Q: Quit",
        PhaseKind::Review => " Enter: Next mistake │ ←: Previous │ Q: Quit",
    }
}
