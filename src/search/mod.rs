//! Query debouncing and fetch-cycle orchestration.

mod controller;
mod debounce;

pub use controller::SearchController;
pub use debounce::Debouncer;
