use crate::catalog::MovieCatalog;
use crate::config::Config;
use crate::search::{Debouncer, SearchController};
use crate::trends::TrendStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, AppEventSender, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

/// Clients shared by every fetch cycle. Built once at startup.
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn MovieCatalog>,
    pub trends: Arc<TrendStore>,
}

/// Runs the terminal UI until the user quits.
///
/// Must be called from within a tokio runtime context.
pub fn run(config: &Config, services: Services, initial_query: Option<String>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = build_app(config, services, initial_query, events.sender());
    app.on_mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Builds an `App` wired to the controller and debouncer.
///
/// Spawns the debouncer task, so a tokio runtime context is required.
pub fn build_app(
    config: &Config,
    services: Services,
    initial_query: Option<String>,
    sender: AppEventSender,
) -> App {
    let mut app = App::new(config.trends.trending_limit);
    let initial_query = initial_query.unwrap_or_default();
    if !initial_query.is_empty() {
        app.set_query(initial_query.clone());
    }

    let settled_tx = sender.clone();
    let debouncer = Debouncer::spawn(config.ui.debounce(), initial_query, move |query| {
        if settled_tx.send(AppEvent::QuerySettled(query)).is_err() {
            tracing::trace!("Settled query dropped (UI loop gone)");
        }
    });
    let controller = SearchController::new(services.catalog, services.trends, sender);
    app.attach(controller, debouncer);
    app
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.on_paste(&text),
        AppEvent::Tick => app.on_tick(),
        // ratatui picks up the new size on the next draw.
        AppEvent::Resize(..) => {}
        AppEvent::QuerySettled(query) => app.on_query_settled(query),
        AppEvent::SearchFinished {
            request_id,
            outcome,
        } => app.on_search_finished(request_id, outcome),
        AppEvent::TrendingLoaded(records) => app.on_trending_loaded(records),
    }
}
