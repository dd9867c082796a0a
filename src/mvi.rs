//! Unidirectional state primitives shared by the quiz core and the answer form.
//!
//! ```text
//! key press ─→ Intent ─→ Reducer::reduce ─→ State ─→ render
//! ```
//!
//! A reducer is the single place a state changes. The caller owns the state
//! and swaps it for the reducer's output.

/// Snapshot a screen renders from. Cloned and compared, never mutated in place.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// One user action, described as data.
pub trait Intent: Send + 'static {}

/// Pure transition function over a state/intent pair.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Intents that do not apply to `state` return it unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Folds a sequence of intents over `state`.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
