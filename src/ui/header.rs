use crate::session::{PhaseKind, QuizSession};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &QuizSession) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  🛡️  ", text_style),
            Span::styled("Trust or Trap", title_style),
        ];

        let status = match session.kind() {
            PhaseKind::Playing | PhaseKind::Feedback => {
                let progress = session.progress();
                Some(format!(
                    "Question {} of {}  ({}%)",
                    progress.current,
                    progress.total,
                    progress.percent()
                ))
            }
            PhaseKind::Results | PhaseKind::Review => {
                let summary = session.summary();
                Some(format!("Score {}/{}", summary.correct, summary.total))
            }
            _ => None,
        };

        if let Some(status) = status {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(status, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
