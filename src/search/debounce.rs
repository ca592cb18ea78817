use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

/// Trailing-edge debouncer over a stream of query values.
///
/// Each pushed value restarts a single timer. When the timer fires the last
/// value is emitted, but only if it differs from the previously emitted one.
/// Dropping the debouncer stops its task and discards any pending value.
pub struct Debouncer {
    tx: mpsc::UnboundedSender<String>,
}

impl Debouncer {
    /// Spawns the timer task on the current tokio runtime.
    ///
    /// `initial` counts as already emitted, so typing and then restoring it
    /// within one quiet period emits nothing.
    pub fn spawn<F>(delay: Duration, initial: String, on_settled: F) -> Self
    where
        F: Fn(String) + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(rx, delay, initial, on_settled));
        Self { tx }
    }

    pub fn push(&self, value: String) {
        if self.tx.send(value).is_err() {
            tracing::debug!("Debouncer task has stopped; dropping query");
        }
    }
}

async fn run<F>(
    mut rx: mpsc::UnboundedReceiver<String>,
    delay: Duration,
    mut last_emitted: String,
    on_settled: F,
) where
    F: Fn(String),
{
    let mut pending: Option<String> = None;
    let mut deadline = Instant::now();

    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Some(value) => {
                    pending = Some(value);
                    deadline = Instant::now() + delay;
                }
                None => break,
            },
            _ = sleep_until(deadline), if pending.is_some() => {
                if let Some(value) = pending.take() {
                    if value != last_emitted {
                        last_emitted = value.clone();
                        on_settled(value);
                    }
                }
            }
        }
    }
}
