mod common;

use common::movie;
use moviescout::ui::mvi::Reducer;
use moviescout::ui::search::{FetchOutcome, ResultView, SearchIntent, SearchReducer, SearchState};

fn started(state: SearchState, request_id: u64, query: &str) -> SearchState {
    SearchReducer::reduce(
        state,
        SearchIntent::FetchStarted {
            request_id,
            query: query.to_string(),
        },
    )
}

fn finished(state: SearchState, request_id: u64, outcome: FetchOutcome) -> SearchState {
    SearchReducer::reduce(
        state,
        SearchIntent::FetchFinished {
            request_id,
            outcome,
        },
    )
}

fn loaded_with(titles: &[&str]) -> SearchState {
    let movies = titles
        .iter()
        .enumerate()
        .map(|(i, t)| movie(i as u64 + 1, t))
        .collect();
    let state = started(SearchState::default(), 1, "");
    finished(state, 1, FetchOutcome::Loaded(movies))
}

#[test]
fn fetch_started_sets_loading_and_clears_error() {
    let mut state = loaded_with(&["Dune"]);
    state.error_message = Some("old".to_string());

    let state = started(state, 2, "alien");

    assert!(state.is_loading);
    assert!(state.error_message.is_none());
    assert_eq!(state.settled_query, "alien");
    assert_eq!(state.latest_request, Some(2));
    // Previous results stay until the new cycle completes.
    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.result_view(), ResultView::Loading);
}

#[test]
fn loaded_replaces_results() {
    let state = started(loaded_with(&["Dune", "Alien"]), 2, "heat");

    let state = finished(state, 2, FetchOutcome::Loaded(vec![movie(9, "Heat")]));

    assert!(!state.is_loading);
    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.movies[0].title, "Heat");
}

#[test]
fn stale_completion_is_dropped() {
    let state = started(SearchState::default(), 1, "a");
    let state = started(state, 2, "ab");

    let state = finished(state, 1, FetchOutcome::Loaded(vec![movie(1, "A")]));
    assert!(state.is_loading);
    assert!(state.movies.is_empty());

    let state = finished(state, 2, FetchOutcome::Loaded(vec![movie(2, "AB")]));
    assert!(!state.is_loading);
    assert_eq!(state.movies[0].title, "AB");

    // Late failure from the first cycle changes nothing either.
    let state = finished(
        state,
        1,
        FetchOutcome::Failed {
            message: "late".to_string(),
        },
    );
    assert!(state.error_message.is_none());
}

#[test]
fn rejected_clears_results() {
    let state = started(loaded_with(&["Dune"]), 2, "x");

    let state = finished(
        state,
        2,
        FetchOutcome::Rejected {
            message: "Invalid API key".to_string(),
        },
    );

    assert!(!state.is_loading);
    assert!(state.movies.is_empty());
    assert_eq!(state.result_view(), ResultView::Error("Invalid API key"));
}

#[test]
fn failed_keeps_previous_results() {
    let state = started(loaded_with(&["Dune"]), 2, "x");

    let state = finished(
        state,
        2,
        FetchOutcome::Failed {
            message: "Failed to fetch movies. Please try again later.".to_string(),
        },
    );

    assert!(!state.is_loading);
    assert_eq!(state.movies.len(), 1);
    assert!(matches!(state.result_view(), ResultView::Error(_)));
}

#[test]
fn loading_and_error_never_coexist() {
    let mut state = SearchState::default();
    let steps: Vec<(u64, Option<FetchOutcome>)> = vec![
        (1, None),
        (
            1,
            Some(FetchOutcome::Failed {
                message: "e".to_string(),
            }),
        ),
        (2, None),
        (
            2,
            Some(FetchOutcome::Rejected {
                message: "r".to_string(),
            }),
        ),
        (3, None),
        (3, Some(FetchOutcome::Loaded(Vec::new()))),
    ];
    for (id, outcome) in steps {
        state = match outcome {
            None => started(state, id, "q"),
            Some(outcome) => finished(state, id, outcome),
        };
        assert!(!(state.is_loading && state.error_message.is_some()));
    }
}

#[test]
fn query_changed_only_touches_the_field() {
    let state = loaded_with(&["Dune"]);

    let state = SearchReducer::reduce(
        state,
        SearchIntent::QueryChanged {
            query: "du".to_string(),
        },
    );

    assert_eq!(state.query, "du");
    assert_eq!(state.settled_query, "");
    assert!(!state.is_loading);
    assert_eq!(state.heading(), "Results for “du”");
}

#[test]
fn no_matches_follows_live_query() {
    let state = loaded_with(&[]);
    assert!(state.no_matches_message().is_none());

    let state = SearchReducer::reduce(
        state,
        SearchIntent::QueryChanged {
            query: "qwxz".to_string(),
        },
    );
    assert_eq!(
        state.no_matches_message().as_deref(),
        Some("No matches for “qwxz”")
    );

    let state = started(state, 2, "qwxz");
    assert!(state.no_matches_message().is_none());
}

#[test]
fn scroll_is_clamped_to_results() {
    let state = loaded_with(&["A", "B", "C"]);

    let state = SearchReducer::reduce(state, SearchIntent::ScrollDown { lines: 10 });
    assert_eq!(state.scroll, 2);

    let state = SearchReducer::reduce(state, SearchIntent::ScrollUp { lines: 5 });
    assert_eq!(state.scroll, 0);
}
