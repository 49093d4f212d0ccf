//! Per-link click analytics.

use super::click::ClickRecord;

/// Click history owned 1:1 by a [`super::link::UrlRecord`].
///
/// Created empty alongside its record and mutated only through
/// [`AnalyticsEntry::record`], which keeps `total_clicks` equal to the
/// click sequence length. Insertion order is chronological order.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEntry {
    pub total_clicks: u64,
    pub clicks: Vec<ClickRecord>,
}

impl AnalyticsEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a click and bumps the counter in one step.
    pub fn record(&mut self, click: ClickRecord) {
        self.clicks.push(click);
        self.total_clicks += 1;
    }
}
