//! Content provider: the question catalog and emotion metadata.
//!
//! The session core treats everything here as read-only input.

pub mod builtin;
mod catalog;
mod selection;
mod types;

pub use builtin::{emotion_info, emotions};
pub use catalog::{Catalog, CatalogError};
pub use selection::EmotionSelection;
pub use types::{EmotionInfo, EmotionTag, MessageCategory, QuestionRecord, Verdict};
