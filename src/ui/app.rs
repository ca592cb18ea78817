use crate::search::{Debouncer, SearchController};
use crate::trends::TrendRecord;
use crate::ui::mvi::Reducer;
use crate::ui::search::{FetchOutcome, RequestId, SearchIntent, SearchReducer, SearchState};
use crate::ui::trending::{TrendingIntent, TrendingReducer, TrendingState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    should_quit: bool,
    /// Search screen state (MVI pattern).
    search: SearchState,
    /// Trending panel state (MVI pattern).
    trending: TrendingState,
    trending_limit: usize,
    spinner_frame: usize,
    /// Fetch and trend tasks (resource, managed outside MVI).
    controller: Option<SearchController>,
    debouncer: Option<Debouncer>,
}

impl App {
    pub fn new(trending_limit: usize) -> Self {
        Self {
            should_quit: false,
            search: SearchState::default(),
            trending: TrendingState::default(),
            trending_limit,
            spinner_frame: 0,
            controller: None,
            debouncer: None,
        }
    }

    /// Wire the async side. Without it the app only edits local state.
    pub fn attach(&mut self, controller: SearchController, debouncer: Debouncer) {
        self.controller = Some(controller);
        self.debouncer = Some(debouncer);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn trending(&self) -> &TrendingState {
        &self.trending
    }

    pub fn trending_limit(&self) -> usize {
        self.trending_limit
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn on_tick(&mut self) {
        if self.search.is_loading || self.trending.is_loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    /// Initial fetch cycle plus trending load.
    ///
    /// Uses the current query as-is, skipping the debounce.
    pub fn on_mount(&mut self) {
        let query = self.search.query.clone();
        self.on_query_settled(query);
        self.request_trending_refresh();
    }

    // ========================================================================
    // Search input
    // ========================================================================

    pub fn query(&self) -> &str {
        &self.search.query
    }

    /// Replace the search field contents; schedules a debounced fetch.
    pub fn set_query(&mut self, query: String) {
        if query == self.search.query {
            return;
        }
        if let Some(debouncer) = &self.debouncer {
            debouncer.push(query.clone());
        }
        self.dispatch_search(SearchIntent::QueryChanged { query });
    }

    pub fn push_char(&mut self, ch: char) {
        let mut query = self.search.query.clone();
        query.push(ch);
        self.set_query(query);
    }

    pub fn pop_char(&mut self) {
        let mut query = self.search.query.clone();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn on_paste(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
        if cleaned.is_empty() {
            return;
        }
        let mut query = self.search.query.clone();
        query.push_str(&cleaned);
        self.set_query(query);
    }

    // ========================================================================
    // Fetch cycle
    // ========================================================================

    /// Debounced query arrived: start a fetch cycle.
    pub fn on_query_settled(&mut self, query: String) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        let intent = controller.start_fetch(query);
        self.dispatch_search(intent);
    }

    pub fn on_search_finished(&mut self, request_id: RequestId, outcome: FetchOutcome) {
        self.dispatch_search(SearchIntent::FetchFinished {
            request_id,
            outcome,
        });
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.dispatch_search(SearchIntent::ScrollUp { lines });
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.dispatch_search(SearchIntent::ScrollDown { lines });
    }

    /// Dispatch an intent to the search reducer.
    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
    }

    // ========================================================================
    // Trending panel
    // ========================================================================

    pub fn request_trending_refresh(&mut self) {
        let Some(controller) = &self.controller else {
            return;
        };
        controller.refresh_trending(self.trending_limit);
        self.dispatch_trending(TrendingIntent::LoadStarted);
    }

    pub fn on_trending_loaded(&mut self, records: Vec<TrendRecord>) {
        self.dispatch_trending(TrendingIntent::Loaded { records });
    }

    /// Dispatch an intent to the trending reducer.
    pub fn dispatch_trending(&mut self, intent: TrendingIntent) {
        dispatch_mvi!(self, trending, TrendingReducer, intent);
    }
}
