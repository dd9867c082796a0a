use crate::content::emotions;
use crate::ui::layout::content_column;
use crate::ui::screens::{card, CONTENT_WIDTH};
use crate::ui::theme::{emotion_color, ACCENT, HEADER_TEXT, MUTED_TEXT, TRAP, TRUST};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub fn render_welcome(frame: &mut Frame<'_>, area: Rect, questions: usize) {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Can you spot the scam?",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Scammers don't hack phones. They hack feelings: fear, urgency, greed.",
            text,
        )),
        Line::from(Span::styled(
            "Read each message, name the emotion it plays on, and decide:",
            text,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   TRUST ✅", Style::default().fg(TRUST).add_modifier(Modifier::BOLD)),
            Span::styled("   or   ", muted),
            Span::styled("TRAP 🚫", Style::default().fg(TRAP).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("{} messages per round.", questions), muted)),
        Line::from(""),
        Line::from(Span::styled("Press Enter to start", text.add_modifier(Modifier::BOLD))),
    ];
    frame.render_widget(
        card(" Welcome ", ACCENT, lines),
        content_column(area, CONTENT_WIDTH),
    );
}

pub fn render_tutorial(frame: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Every scam message pulls an emotional lever. Learn to name them:",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
    ];
    for info in emotions() {
        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", info.emoji)),
            Span::styled(
                info.tag.label(),
                Style::default()
                    .fg(emotion_color(info.tag))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", info.description),
                Style::default().fg(HEADER_TEXT),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     e.g. {}", info.examples.join(", ")),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    frame.render_widget(
        card(" How scammers use emotions ", ACCENT, lines),
        content_column(area, CONTENT_WIDTH),
    );
}

pub fn render_instructions(frame: &mut Frame<'_>, area: Rect) {
    let text = Style::default().fg(HEADER_TEXT);
    let step = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let steps = [
        "Read the message carefully: who sent it and what it asks.",
        "Pick the emotion it triggers (1 or 2) with keys 1-6 or Space.",
        "Decide: T for TRUST or X for TRAP.",
        "Press Enter to lock in your answer and see the explanation.",
    ];
    let mut lines = vec![Line::from("")];
    for (number, instruction) in steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", number + 1), step),
            Span::styled(*instruction, text),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Only the TRUST/TRAP verdict counts toward your score.",
        Style::default().fg(MUTED_TEXT),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Enter to begin",
        text.add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(
        card(" How to play ", ACCENT, lines),
        content_column(area, CONTENT_WIDTH),
    );
}
