use crate::content::{emotion_info, QuestionRecord, Verdict};
use crate::session::Progress;
use crate::ui::answer_form::{AnswerFormState, FormSlot, SLOT_COUNT};
use crate::ui::layout::content_column;
use crate::ui::screens::{card, card_height, CONTENT_WIDTH};
use crate::ui::theme::{
    emotion_color, verdict_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

pub fn render_question(
    frame: &mut Frame<'_>,
    area: Rect,
    question: &QuestionRecord,
    progress: Progress,
    form: &AnswerFormState,
) {
    let column = content_column(area, CONTENT_WIDTH);
    let message = message_lines(question);
    let message_height = card_height(&message, column.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(message_height),
            Constraint::Min(0),
        ])
        .split(column);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .gauge_style(Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT))
        .percent(progress.percent())
        .label(format!("Question {} of {}", progress.current, progress.total));
    frame.render_widget(gauge, chunks[0]);

    let title = format!(" {} from {} ", question.category.label(), question.sender);
    frame.render_widget(card(&title, ACCENT, message), chunks[1]);

    render_answer_form(frame, chunks[2], form);
}

fn message_lines(question: &QuestionRecord) -> Vec<Line<'_>> {
    vec![Line::from(Span::styled(
        question.body.as_str(),
        Style::default().fg(HEADER_TEXT),
    ))]
}

/// Emotion chips and verdict buttons with the focus cursor.
pub fn render_answer_form(frame: &mut Frame<'_>, area: Rect, form: &AnswerFormState) {
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = vec![Line::from(Span::styled(
        "What emotion is triggered? (select 1-2)",
        muted,
    ))];

    for index in 0..SLOT_COUNT {
        let Some(slot) = FormSlot::at(index) else {
            continue;
        };
        if slot == FormSlot::Verdict(Verdict::Trust) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Your verdict", muted)));
        }
        lines.push(slot_line(form, index, slot));
    }

    lines.push(Line::from(""));
    let picked = form
        .emotions
        .map(|sel| {
            sel.tags()
                .iter()
                .map(|tag| tag.label())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| "none".to_string());
    lines.push(Line::from(Span::styled(format!("Selected: {}", picked), muted)));
    if form.can_submit() {
        lines.push(Line::from(Span::styled(
            "Press Enter to submit",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(card(" Your answer ", ACCENT, lines), area);
}

fn slot_line(form: &AnswerFormState, index: usize, slot: FormSlot) -> Line<'static> {
    let selected = form.is_selected(slot);
    let marker = if selected { "[x]" } else { "[ ]" };
    let cursor = if form.focused == index { "›" } else { " " };

    let (label, color) = match slot {
        FormSlot::Emotion(tag) => (
            format!(
                "{} {} {}  {}",
                index + 1,
                emotion_info(tag).emoji,
                tag.label(),
                emotion_info(tag).description
            ),
            emotion_color(tag),
        ),
        FormSlot::Verdict(verdict) => (
            format!("{} {}", verdict.label(), verdict.emoji()),
            verdict_color(verdict),
        ),
    };

    let mut label_style = Style::default().fg(color);
    if selected {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let mut line = Line::from(vec![
        Span::styled(format!("{} {} ", cursor, marker), Style::default().fg(HEADER_TEXT)),
        Span::styled(label, label_style),
    ]);
    if form.focused == index {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}
