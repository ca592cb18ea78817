mod intent;
mod reducer;
mod state;

pub use intent::{FetchOutcome, RequestId, SearchIntent};
pub use reducer::SearchReducer;
pub use state::{ResultView, SearchState};
