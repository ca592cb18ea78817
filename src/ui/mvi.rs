//! Model-View-Intent primitives shared by the search and trending screens.
//!
//! ```text
//! key / task event ──→ Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Async work never touches state directly: tasks post an `AppEvent`, the
//! event loop turns it into an intent and the reducer applies it.

/// Something that happened: a keystroke, a settled query, a fetch result.
pub trait Intent: Send + 'static {}

/// Everything a panel needs to render itself.
///
/// `Default` is the pre-mount state and is what `std::mem::take` leaves
/// behind while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure `(State, Intent) -> State`. Side effects (spawning fetches,
    /// pushing to the debouncer) stay in `App`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
