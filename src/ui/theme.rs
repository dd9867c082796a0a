use ratatui::style::Color;

use crate::content::{EmotionTag, Verdict};

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const TRUST: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const TRAP: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const WARNING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Trust => TRUST,
        Verdict::Trap => TRAP,
    }
}

pub fn emotion_color(tag: EmotionTag) -> Color {
    match tag {
        EmotionTag::Fear => Color::Rgb(0xef, 0x44, 0x44),
        EmotionTag::Urgency => Color::Rgb(0xf9, 0x73, 0x16),
        EmotionTag::Greed => Color::Rgb(0x10, 0xb9, 0x81),
        EmotionTag::Authority => Color::Rgb(0x3b, 0x82, 0xf6),
        EmotionTag::Manipulation => Color::Rgb(0xa8, 0x55, 0xf7),
        EmotionTag::Safe => Color::Rgb(0x14, 0xb8, 0xa6),
    }
}
