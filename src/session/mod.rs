//! Quiz session core: phases, answer log, scoring and mistake review.
//!
//! # Components
//! - `state.rs`: `QuizState` and the tagged `Phase`
//! - `intent.rs` / `reducer.rs`: transitions as a pure reducer
//! - `summary.rs`: score, breakdown and achievement derivation
//! - `view.rs`: progress, feedback and review views
//! - `controller.rs`: `QuizSession`, which owns the state and the shuffle

mod answer;
mod controller;
mod intent;
mod reducer;
mod state;
pub mod summary;
mod view;

pub use answer::{Answer, AnswerLog};
pub use controller::{shuffled_order, QuizSession};
pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use state::{Phase, PhaseKind, QuizState};
pub use summary::{Achievement, ScoreSummary, VerdictBreakdown};
pub use view::{EmotionMark, FeedbackView, Progress, ReviewView};
