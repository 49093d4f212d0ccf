//! Shared application state injected into HTTP handlers.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::memory::InMemoryRegistry;

/// Application state shared across all request handlers.
///
/// The registry is owned here (through the services) with a lifetime tied
/// to the process; there is no ambient global store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryRegistry>>,
    pub stats_service: Arc<StatsService<InMemoryRegistry>>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    pub behind_proxy: bool,
}
