//! One render function per quiz phase.

mod feedback;
mod intro;
mod question;
mod results;

pub use feedback::{render_feedback, render_review};
pub use intro::{render_instructions, render_tutorial, render_welcome};
pub use question::{render_answer_form, render_question};
pub use results::render_results;

use crate::ui::theme::GLOBAL_BORDER;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Widest the content column grows on large terminals.
pub const CONTENT_WIDTH: u16 = 78;

/// Bordered, wrapping paragraph with a colored title.
pub fn card<'a>(title: &'a str, accent: Color, lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Rows a wrapped card needs inside `width` columns, borders included.
pub fn card_height(lines: &[Line<'_>], width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(inner))
        .sum();
    (rows as u16).saturating_add(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_height_counts_wrapped_rows() {
        let lines = vec![Line::from("a".repeat(10)), Line::from("")];
        // 10 chars in 4 inner columns -> 3 rows, empty line -> 1 row, borders -> 2
        assert_eq!(card_height(&lines, 6), 6);
    }
}
