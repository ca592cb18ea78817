//! Terminal UI.
//!
//! State lives in MVI reducers (`search`, `trending`) owned by [`app::App`];
//! the runtime loop feeds them events from the terminal and from async tasks.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod movie_card;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
pub mod trending;
