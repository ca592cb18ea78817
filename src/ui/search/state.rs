use crate::catalog::Movie;
use crate::ui::mvi::UiState;
use crate::ui::search::intent::RequestId;

/// Everything the search screen needs to render.
///
/// `is_loading` and `error_message` are never both set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Live contents of the search field.
    pub query: String,
    /// Query of the most recent fetch cycle.
    pub settled_query: String,
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Latest fetch cycle started; older completions are dropped.
    pub latest_request: Option<RequestId>,
    /// Index of the first visible result card.
    pub scroll: usize,
}

impl UiState for SearchState {}

/// What the result area shows, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultView<'a> {
    Loading,
    Error(&'a str),
    Results(&'a [Movie]),
}

impl SearchState {
    pub fn result_view(&self) -> ResultView<'_> {
        if self.is_loading {
            ResultView::Loading
        } else if let Some(message) = self.error_message.as_deref() {
            ResultView::Error(message)
        } else {
            ResultView::Results(&self.movies)
        }
    }

    /// "No matches" line, shown below the result area when not loading,
    /// the search field is non-empty and there are no results.
    pub fn no_matches_message(&self) -> Option<String> {
        if self.is_loading || self.query.is_empty() || !self.movies.is_empty() {
            return None;
        }
        Some(format!("No matches for “{}”", self.query))
    }

    /// Heading above the result list.
    pub fn heading(&self) -> String {
        if self.query.is_empty() {
            "Popular Movies".to_string()
        } else {
            format!("Results for “{}”", self.query)
        }
    }

    pub fn is_current(&self, request_id: RequestId) -> bool {
        self.latest_request == Some(request_id)
    }
}
