//! Click event model for asynchronous click tracking.

/// An in-memory representation of a click for async processing.
///
/// Created in the redirect handler with raw request metadata and sent
/// over a bounded channel, decoupling the redirect response from
/// geolocation and analytics recording. Normalization (unknown user
/// agents, referrer reduction) happens in the worker, not here.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub ip: String,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event.
    pub fn new(
        code: String,
        ip: String,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            code,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
        }
    }
}
