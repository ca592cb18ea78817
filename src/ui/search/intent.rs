use crate::catalog::{CatalogError, Movie};
use crate::ui::mvi::Intent;

/// Tag of one fetch cycle. Strictly increasing per controller.
pub type RequestId = u64;

/// How a fetch cycle ended, as seen by the result view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(Vec<Movie>),
    /// The catalog answered but reported failure; results are cleared.
    Rejected { message: String },
    /// The request itself failed; previous results stay.
    Failed { message: String },
}

impl FetchOutcome {
    pub fn from_result(result: Result<Vec<Movie>, CatalogError>) -> Self {
        match result {
            Ok(movies) => FetchOutcome::Loaded(movies),
            Err(err) if err.is_transport() => FetchOutcome::Failed {
                message: err.user_message().to_string(),
            },
            Err(err) => FetchOutcome::Rejected {
                message: err.user_message().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// User edited the search field.
    QueryChanged { query: String },
    /// A fetch cycle for `query` has been issued.
    FetchStarted { request_id: RequestId, query: String },
    /// A fetch cycle completed. Ignored unless it is the latest one started.
    FetchFinished {
        request_id: RequestId,
        outcome: FetchOutcome,
    },
    ScrollUp { lines: usize },
    ScrollDown { lines: usize },
}

impl Intent for SearchIntent {}
