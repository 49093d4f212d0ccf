//! In-memory implementation of the URL registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{AnalyticsEntry, NewClick, NewUrlRecord, UrlRecord};
use crate::domain::repositories::{UrlAnalytics, UrlRegistry};
use crate::error::AppError;

/// A record and its click history, stored under one key so they share a
/// lifetime and mutate under one shard lock.
#[derive(Debug)]
struct RegistryEntry {
    record: UrlRecord,
    analytics: AnalyticsEntry,
}

/// Concurrent in-memory registry keyed by shortcode.
///
/// DashMap's sharded locking gives the guarantees the service needs
/// without a global lock:
///
/// - `create` uses the entry API, making check-and-insert one atomic step
/// - `record_click` holds the entry's write guard across the
///   append-and-increment, so concurrent clicks never lose updates and
///   readers never observe a half-applied click
/// - `cleanup_expired` re-checks expiry under the removal lock, so a sweep
///   racing a create can only remove entries that are actually expired
///
/// State lives only as long as the process; restarts start empty.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: DashMap<String, RegistryEntry>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl UrlRegistry for InMemoryRegistry {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.entries.contains_key(code))
    }

    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        match self.entries.entry(new_record.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Shortcode already in use",
                json!({ "shortcode": new_record.code }),
            )),
            Entry::Vacant(slot) => {
                let record = UrlRecord::new(
                    new_record.code,
                    new_record.original_url,
                    new_record.validity_minutes,
                );
                slot.insert(RegistryEntry {
                    record: record.clone(),
                    analytics: AnalyticsEntry::new(),
                });
                Ok(record)
            }
        }
    }

    async fn find_active(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let now = Utc::now();

        Ok(self
            .entries
            .get(code)
            .filter(|entry| entry.record.is_active_at(now))
            .map(|entry| entry.record.clone()))
    }

    async fn record_click(&self, code: &str, click: NewClick) -> Result<bool, AppError> {
        match self.entries.get_mut(code) {
            Some(mut entry) => {
                entry.analytics.record(click.into_record());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_analytics(&self, code: &str) -> Result<Option<UrlAnalytics>, AppError> {
        let now = Utc::now();

        Ok(self.entries.get(code).map(|entry| UrlAnalytics {
            record: entry.record.clone(),
            total_clicks: entry.analytics.total_clicks,
            clicks: entry.analytics.clicks.clone(),
            is_active: entry.record.is_active_at(now),
        }))
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.record.expires_at < now)
            .map(|entry| entry.key().clone())
            .collect();

        let mut removed = 0;
        for code in expired {
            // Re-check under the removal lock; the entry may have been
            // purged by a concurrent sweep already.
            if self
                .entries
                .remove_if(&code, |_, entry| entry.record.expires_at < now)
                .is_some()
            {
                removed += 1;
            }
        }

        Ok(removed)
    }
}
