mod intent;
mod reducer;
mod state;

pub use intent::AnswerFormIntent;
pub use reducer::AnswerFormReducer;
pub use state::{AnswerFormState, FormSlot, SLOT_COUNT};
