use crate::session::{ScoreSummary, VerdictBreakdown};
use crate::ui::layout::content_column;
use crate::ui::screens::{card, CONTENT_WIDTH};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TRAP, TRUST,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

pub fn render_results(frame: &mut Frame<'_>, area: Rect, summary: &ScoreSummary) {
    let column = content_column(area, CONTENT_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(column);

    let score = vec![
        Line::from(Span::styled(
            format!("{}/{}", summary.correct, summary.total),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Accuracy: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{}%", summary.accuracy_percent),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(card(" Game Complete! ", ACCENT, score), chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .gauge_style(Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT))
        .percent(u16::from(summary.accuracy_percent));
    frame.render_widget(gauge, chunks[1]);

    let breakdown = vec![
        breakdown_line("TRAP messages ", summary.trap, TRAP),
        breakdown_line("TRUST messages", summary.trust, TRUST),
    ];
    frame.render_widget(card(" Performance ", ACCENT, breakdown), chunks[2]);

    let achievement = vec![Line::from(vec![
        Span::raw(format!("{}  ", summary.achievement.emoji())),
        Span::styled(
            summary.achievement.title(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Achievement Unlocked", Style::default().fg(MUTED_TEXT)),
    ])];
    frame.render_widget(card(" Achievement ", ACCENT, achievement), chunks[3]);

    let mut actions = Vec::new();
    if summary.has_mistakes() {
        actions.push(Line::from(Span::styled(
            format!("R: Review {} mistake(s)", summary.mistakes),
            Style::default().fg(HEADER_TEXT),
        )));
    }
    actions.push(Line::from(Span::styled(
        "P: Play again",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(Paragraph::new(actions), chunks[4]);
}

fn breakdown_line(label: &'static str, breakdown: VerdictBreakdown, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!("  {}/{}", breakdown.correct, breakdown.total),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
