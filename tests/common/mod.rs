//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use moviescout::catalog::{CatalogError, Movie, MovieCatalog};
use moviescout::config::Config;
use moviescout::trends::{MemoryBackend, TrendStore};
use moviescout::ui::app::App;
use moviescout::ui::events::{AppEvent, EventHandler};
use moviescout::ui::render::draw;
use moviescout::ui::runtime::{build_app, handle_event, Services};
use parking_lot::Mutex;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

// -- Fixtures -----------------------------------------------------------------

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/{id}.jpg")),
        vote_average: Some(6.5),
        release_date: Some("2001-01-01".to_string()),
        original_language: "en".to_string(),
    }
}

/// The worked example: one "Batman" result.
pub const BATMAN_RESPONSE: &str = r#"{"results":[{"id":1,"title":"Batman","vote_average":7.8,"release_date":"2022-03-01","original_language":"en","poster_path":"/x.jpg"}]}"#;

pub fn batman() -> Movie {
    Movie {
        id: 1,
        title: "Batman".to_string(),
        poster_path: Some("/x.jpg".to_string()),
        vote_average: Some(7.8),
        release_date: Some("2022-03-01".to_string()),
        original_language: "en".to_string(),
    }
}

/// Config with a short debounce so flow tests stay fast.
pub fn test_config(debounce_ms: u64) -> Config {
    let mut config = Config::default();
    config.ui.debounce_ms = debounce_ms;
    config
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Scripted catalog ---------------------------------------------------------

/// What the stub answers for a given query.
#[derive(Debug, Clone)]
pub enum StubReply {
    Movies(Vec<Movie>),
    /// In-band failure carrying this message.
    Backend(String),
    /// HTTP-level failure.
    Transport,
}

/// `MovieCatalog` answering from a per-query script, with optional delays.
#[derive(Default)]
pub struct StubCatalog {
    script: Mutex<HashMap<String, (u64, StubReply)>>,
    calls: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` ("" for discover) with `reply` after `delay_ms`.
    pub fn on(&self, query: &str, delay_ms: u64, reply: StubReply) -> &Self {
        self.script
            .lock()
            .insert(query.to_string(), (delay_ms, reply));
        self
    }

    /// Queries received so far, "" standing for discover.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MovieCatalog for StubCatalog {
    async fn search(&self, query: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        let key = query.unwrap_or("").to_string();
        self.calls.lock().push(key.clone());
        let (delay_ms, reply) = self
            .script
            .lock()
            .get(&key)
            .cloned()
            .unwrap_or((0, StubReply::Movies(Vec::new())));
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        match reply {
            StubReply::Movies(movies) => Ok(movies),
            StubReply::Backend(message) => Err(CatalogError::Backend { message }),
            StubReply::Transport => Err(CatalogError::Status { status: 500 }),
        }
    }
}

// -- App harness --------------------------------------------------------------

/// An `App` wired to a stub catalog and an in-memory trend store, with a
/// detached event channel instead of a terminal.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub catalog: Arc<StubCatalog>,
    pub store: Arc<MemoryBackend>,
}

impl Harness {
    /// Must be called inside a tokio runtime.
    pub fn new(catalog: StubCatalog, debounce_ms: u64, initial_query: Option<&str>) -> Self {
        let catalog = Arc::new(catalog);
        let store = Arc::new(MemoryBackend::new());
        let services = Services {
            catalog: catalog.clone(),
            trends: Arc::new(TrendStore::new(store.clone(), IMAGE_BASE)),
        };
        let events = EventHandler::detached();
        let app = build_app(
            &test_config(debounce_ms),
            services,
            initial_query.map(str::to_string),
            events.sender(),
        );
        Self {
            app,
            events,
            catalog,
            store,
        }
    }

    /// Block for the next event and feed it to the app.
    ///
    /// Blocks the calling thread; use multi-thread tokio tests.
    pub fn pump(&mut self, timeout: Duration) -> Option<String> {
        let event = self.events.next(timeout).ok()?;
        let name = event_name(&event);
        handle_event(&mut self.app, event);
        Some(name)
    }

    /// Pump events until `done` holds or `timeout` passes.
    pub fn pump_until<F>(&mut self, timeout: Duration, done: F) -> bool
    where
        F: Fn(&App) -> bool,
    {
        let start = std::time::Instant::now();
        while start.elapsed() < timeout {
            if done(&self.app) {
                return true;
            }
            self.pump(Duration::from_millis(20));
        }
        done(&self.app)
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.app.push_char(ch);
        }
    }

    pub fn screen(&self) -> String {
        render_to_string(&self.app, 100, 30)
    }
}

fn event_name(event: &AppEvent) -> String {
    match event {
        AppEvent::Key(_) => "key".to_string(),
        AppEvent::Paste(_) => "paste".to_string(),
        AppEvent::Tick => "tick".to_string(),
        AppEvent::Resize(..) => "resize".to_string(),
        AppEvent::QuerySettled(q) => format!("settled:{q}"),
        AppEvent::SearchFinished { request_id, .. } => format!("finished:{request_id}"),
        AppEvent::TrendingLoaded(_) => "trending".to_string(),
    }
}

/// Draw the app into an in-memory buffer and return it as text, one line
/// per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Poll `cond` until it holds or `timeout` passes.
pub async fn wait_until<F>(timeout: Duration, cond: F) -> bool
where
    F: Fn() -> bool,
{
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if cond() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    cond()
}
