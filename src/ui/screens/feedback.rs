use crate::session::{FeedbackView, ReviewView};
use crate::ui::layout::content_column;
use crate::ui::screens::{card, card_height, CONTENT_WIDTH};
use crate::ui::theme::{
    emotion_color, verdict_color, ACCENT, HEADER_TEXT, MUTED_TEXT, TRAP, TRUST, WARNING,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_feedback(frame: &mut Frame<'_>, area: Rect, view: &FeedbackView<'_>) {
    let next = if view.is_last {
        "Enter: See Results →"
    } else {
        "Enter: Next Message →"
    };
    render_sections(frame, area, None, view, next);
}

pub fn render_review(frame: &mut Frame<'_>, area: Rect, view: &ReviewView<'_>) {
    let heading = format!("Reviewing mistake {} of {}", view.position, view.count);
    let next = if view.feedback.is_last {
        "Enter: Back to Results →"
    } else {
        "Enter: Next Mistake →"
    };
    render_sections(frame, area, Some(heading), &view.feedback, next);
}

fn render_sections(
    frame: &mut Frame<'_>,
    area: Rect,
    heading: Option<String>,
    view: &FeedbackView<'_>,
    next_hint: &'static str,
) {
    let column = content_column(area, CONTENT_WIDTH);
    let width = column.width;

    let (banner_title, banner_color) = if view.correct() {
        (" Correct! ", TRUST)
    } else {
        (" Incorrect ", TRAP)
    };
    let banner = banner_lines(view, heading);
    let details = detail_lines(view);
    let explanation = vec![Line::from(Span::styled(
        view.question.explanation.as_str(),
        Style::default().fg(HEADER_TEXT),
    ))];
    let advice = vec![Line::from(Span::styled(
        view.question.advice.as_str(),
        Style::default().fg(HEADER_TEXT),
    ))];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(card_height(&banner, width)),
            Constraint::Length(card_height(&details, width)),
            Constraint::Length(card_height(&explanation, width)),
            Constraint::Length(card_height(&advice, width)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(column);

    frame.render_widget(card(banner_title, banner_color, banner), chunks[0]);
    frame.render_widget(card(" Correct answer ", ACCENT, details), chunks[1]);
    frame.render_widget(
        card(view.explanation_title(), ACCENT, explanation),
        chunks[2],
    );
    frame.render_widget(card(" What to do instead ", WARNING, advice), chunks[3]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            next_hint,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))),
        chunks[4],
    );
}

fn banner_lines<'a>(view: &FeedbackView<'a>, heading: Option<String>) -> Vec<Line<'a>> {
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();
    if let Some(heading) = heading {
        lines.push(Line::from(Span::styled(
            heading,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
    }
    let encouragement = if view.correct() {
        "Great job! You're learning to spot the tricks!"
    } else {
        "Good try! Here's what to look for..."
    };
    lines.push(Line::from(Span::styled(encouragement, muted)));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} from {}: ", view.question.category.label(), view.question.sender),
            muted,
        ),
        Span::styled(
            view.question.body.as_str(),
            Style::default().fg(HEADER_TEXT),
        ),
    ]));
    let picked = view
        .answer
        .emotions
        .tags()
        .iter()
        .map(|tag| tag.label())
        .collect::<Vec<_>>()
        .join(" + ");
    lines.push(Line::from(vec![
        Span::styled("You said: ", muted),
        Span::styled(
            view.answer.verdict.label(),
            Style::default()
                .fg(verdict_color(view.answer.verdict))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", picked), muted),
    ]));
    lines
}

fn detail_lines<'a>(view: &FeedbackView<'a>) -> Vec<Line<'a>> {
    let verdict = view.question.verdict;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", verdict.label(), verdict.emoji()),
            Style::default()
                .fg(verdict_color(verdict))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Emotions in this message:",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    for mark in &view.marks {
        let rank = if mark.primary { "main" } else { "secondary" };
        let mut spans = vec![
            Span::styled(
                format!("  {}", mark.tag.label()),
                Style::default().fg(emotion_color(mark.tag)),
            ),
            Span::styled(format!(" ({})", rank), Style::default().fg(MUTED_TEXT)),
        ];
        if mark.picked {
            spans.push(Span::styled("  ✓", Style::default().fg(TRUST)));
        }
        lines.push(Line::from(spans));
    }
    if view.emotion_matched {
        lines.push(Line::from(Span::styled(
            "✓ You identified at least one correct emotion!",
            Style::default().fg(TRUST),
        )));
    }
    lines
}
