use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel a quiz message arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCategory {
    #[serde(rename = "SMS", alias = "Sms", alias = "sms")]
    Sms,
    #[serde(alias = "email")]
    Email,
    #[serde(alias = "whatsapp")]
    WhatsApp,
}

impl MessageCategory {
    pub fn label(self) -> &'static str {
        match self {
            MessageCategory::Sms => "SMS",
            MessageCategory::Email => "Email",
            MessageCategory::WhatsApp => "WhatsApp",
        }
    }
}

/// Emotional trigger a message relies on.
///
/// Five manipulation techniques plus [`EmotionTag::Safe`] for messages
/// that apply no pressure at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionTag {
    Fear,
    Urgency,
    Greed,
    Authority,
    Manipulation,
    Safe,
}

impl EmotionTag {
    /// Display order used by the selection affordance.
    pub const ALL: [EmotionTag; 6] = [
        EmotionTag::Fear,
        EmotionTag::Urgency,
        EmotionTag::Greed,
        EmotionTag::Authority,
        EmotionTag::Manipulation,
        EmotionTag::Safe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmotionTag::Fear => "Fear",
            EmotionTag::Urgency => "Urgency",
            EmotionTag::Greed => "Greed",
            EmotionTag::Authority => "Authority",
            EmotionTag::Manipulation => "Manipulation",
            EmotionTag::Safe => "Safe",
        }
    }

    pub fn is_manipulative(self) -> bool {
        !matches!(self, EmotionTag::Safe)
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ground-truth (or user-chosen) classification of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "TRUST", alias = "Trust")]
    Trust,
    #[serde(rename = "TRAP", alias = "Trap")]
    Trap,
}

impl Verdict {
    pub const ALL: [Verdict; 2] = [Verdict::Trust, Verdict::Trap];

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Trust => "TRUST",
            Verdict::Trap => "TRAP",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Verdict::Trust => "✅",
            Verdict::Trap => "🚫",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One quiz question. Immutable once loaded into a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Unique across the catalog.
    pub id: u32,
    pub category: MessageCategory,
    pub sender: String,
    /// Message text as the recipient would see it.
    pub body: String,
    /// Ground-truth triggers, primary first. One or two entries.
    pub emotions: Vec<EmotionTag>,
    pub verdict: Verdict,
    pub explanation: String,
    pub advice: String,
}

impl QuestionRecord {
    pub fn primary_emotion(&self) -> Option<EmotionTag> {
        self.emotions.first().copied()
    }
}

/// Display metadata for an emotion tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionInfo {
    pub tag: EmotionTag,
    pub emoji: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_safe_is_not_manipulative() {
        let manipulative: Vec<_> = EmotionTag::ALL
            .iter()
            .filter(|tag| tag.is_manipulative())
            .collect();
        assert_eq!(manipulative.len(), 5);
        assert!(!EmotionTag::Safe.is_manipulative());
    }

    #[test]
    fn verdict_serializes_uppercase() {
        let json = serde_json::to_string(&Verdict::Trap).unwrap();
        assert_eq!(json, "\"TRAP\"");
        let parsed: Verdict = serde_json::from_str("\"TRUST\"").unwrap();
        assert_eq!(parsed, Verdict::Trust);
    }

    #[test]
    fn category_accepts_source_spelling() {
        let parsed: MessageCategory = serde_json::from_str("\"SMS\"").unwrap();
        assert_eq!(parsed, MessageCategory::Sms);
        let parsed: MessageCategory = serde_json::from_str("\"WhatsApp\"").unwrap();
        assert_eq!(parsed, MessageCategory::WhatsApp);
    }
}
