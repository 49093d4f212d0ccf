#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

use linksnip::application::services::{LinkService, StatsService};
use linksnip::domain::click_event::ClickEvent;
use linksnip::domain::entities::NewUrlRecord;
use linksnip::domain::repositories::UrlRegistry;
use linksnip::infrastructure::memory::InMemoryRegistry;
use linksnip::infrastructure::remote_log::RemoteLogger;
use linksnip::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds an AppState over a fresh in-memory registry.
///
/// Returns the click channel receiver so tests can observe enqueued
/// events, and the registry itself for direct seeding and inspection.
pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>, Arc<InMemoryRegistry>) {
    let registry = Arc::new(InMemoryRegistry::new());
    let (tx, rx) = mpsc::channel(100);

    let link_service = Arc::new(LinkService::new(
        registry.clone(),
        RemoteLogger::disabled(),
        TEST_BASE_URL.to_string(),
        30,
    ));
    let stats_service = Arc::new(StatsService::new(registry.clone(), RemoteLogger::disabled()));

    let state = AppState {
        link_service,
        stats_service,
        click_sender: tx,
        behind_proxy: false,
    };

    (state, rx, registry)
}

pub async fn create_test_record(registry: &InMemoryRegistry, code: &str, url: &str) {
    registry
        .create(NewUrlRecord {
            code: code.to_string(),
            original_url: url.to_string(),
            validity_minutes: 30,
        })
        .await
        .unwrap();
}

/// Seeds a record whose expiry already passed, without sleeping.
pub async fn create_expired_record(registry: &InMemoryRegistry, code: &str, url: &str) {
    registry
        .create(NewUrlRecord {
            code: code.to_string(),
            original_url: url.to_string(),
            validity_minutes: -5,
        })
        .await
        .unwrap();
}
