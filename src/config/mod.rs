//! Configuration loaded from `~/.config/trapwise/config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, QuizConfig, UiConfig};
