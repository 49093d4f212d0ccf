//! Fire-and-forget forwarding of structured log events to a remote
//! collector.
//!
//! Significant service events (link created, not-found, expired access,
//! click recorded, cleanup counts) are handed off as
//! `(stack, level, package, message)` tuples. Delivery is best-effort: the
//! producing side does a non-blocking send into a bounded queue, a
//! detached task POSTs events as JSON, and failures are swallowed after a
//! local debug note. The originating operation never waits on, or fails
//! because of, the collector.

use serde::Serialize;
use tokio::sync::mpsc;

/// Stack identifier attached to every event from this service.
const STACK: &str = "backend";

/// A structured log event bound for the remote collector.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub stack: String,
    pub level: String,
    pub package: String,
    pub message: String,
}

/// Cheap handle for emitting remote log events.
///
/// Cloneable into services and workers. A disabled logger (no sink
/// configured) drops every event; local tracing is unaffected either way.
#[derive(Clone)]
pub struct RemoteLogger {
    tx: Option<mpsc::Sender<LogEvent>>,
}

impl RemoteLogger {
    /// A logger that discards everything; used when `LOG_SINK_URL` is unset.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Queues an event for delivery. Never blocks; a full queue drops the
    /// event.
    pub fn log(&self, level: &str, package: &str, message: impl Into<String>) {
        let Some(tx) = &self.tx else {
            return;
        };

        let event = LogEvent {
            stack: STACK.to_string(),
            level: level.to_string(),
            package: package.to_string(),
            message: message.into(),
        };

        if tx.try_send(event).is_err() {
            tracing::debug!("remote log queue full, event dropped");
        }
    }
}

/// Spawns the forwarder task and returns the logger handle feeding it.
///
/// The task drains the queue one event at a time; the synchronous HTTP
/// client runs inside `spawn_blocking` to stay off the async runtime.
pub fn spawn_forwarder(sink_url: String, capacity: usize) -> RemoteLogger {
    let (tx, mut rx) = mpsc::channel::<LogEvent>(capacity);

    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let url = sink_url.clone();

            let delivery =
                tokio::task::spawn_blocking(move || post_event(&url, &event)).await;

            match delivery {
                Ok(Err(e)) => tracing::debug!("remote log delivery failed: {}", e),
                Err(e) => tracing::debug!("remote log task failed: {}", e),
                Ok(Ok(())) => {}
            }
        }
    });

    RemoteLogger { tx: Some(tx) }
}

fn post_event(url: &str, event: &LogEvent) -> Result<(), ureq::Error> {
    ureq::post(url).send_json(event)?;
    Ok(())
}
