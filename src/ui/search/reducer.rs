use crate::ui::mvi::Reducer;
use crate::ui::search::intent::{FetchOutcome, SearchIntent};
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::QueryChanged { query } => SearchState { query, ..state },
            SearchIntent::FetchStarted { request_id, query } => SearchState {
                settled_query: query,
                is_loading: true,
                error_message: None,
                latest_request: Some(request_id),
                ..state
            },
            SearchIntent::FetchFinished {
                request_id,
                outcome,
            } => {
                if !state.is_current(request_id) {
                    tracing::trace!(request_id, "Dropping stale search result");
                    return state;
                }
                match outcome {
                    FetchOutcome::Loaded(movies) => SearchState {
                        movies,
                        is_loading: false,
                        error_message: None,
                        scroll: 0,
                        ..state
                    },
                    FetchOutcome::Rejected { message } => SearchState {
                        movies: Vec::new(),
                        is_loading: false,
                        error_message: Some(message),
                        scroll: 0,
                        ..state
                    },
                    FetchOutcome::Failed { message } => SearchState {
                        is_loading: false,
                        error_message: Some(message),
                        ..state
                    },
                }
            }
            SearchIntent::ScrollUp { lines } => SearchState {
                scroll: state.scroll.saturating_sub(lines),
                ..state
            },
            SearchIntent::ScrollDown { lines } => {
                let max = state.movies.len().saturating_sub(1);
                SearchState {
                    scroll: (state.scroll + lines).min(max),
                    ..state
                }
            }
        }
    }
}
