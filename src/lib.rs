//! Trust or Trap: a terminal quiz that teaches how to tell manipulative
//! messages from legitimate ones by the emotions they play on.

pub mod config;
pub mod content;
pub mod logging;
pub mod mvi;
pub mod session;
pub mod ui;
