//! Click statistics service.

use std::sync::Arc;

use crate::domain::repositories::{UrlAnalytics, UrlRegistry};
use crate::error::AppError;
use crate::infrastructure::remote_log::RemoteLogger;
use serde_json::json;

const PACKAGE: &str = "stats_service";

/// Service for retrieving per-link click analytics.
pub struct StatsService<R: UrlRegistry> {
    registry: Arc<R>,
    remote_log: RemoteLogger,
}

impl<R: UrlRegistry> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(registry: Arc<R>, remote_log: RemoteLogger) -> Self {
        Self {
            registry,
            remote_log,
        }
    }

    /// Retrieves the analytics view for a shortcode.
    ///
    /// Expired records behave exactly like absent ones: both return
    /// [`AppError::NotFound`], so callers cannot probe whether an expired
    /// link ever existed. The raw record may still sit in the registry
    /// until the next cleanup sweep; that is invisible here.
    pub async fn get_stats(&self, code: &str) -> Result<UrlAnalytics, AppError> {
        match self.registry.get_analytics(code).await? {
            Some(analytics) if analytics.is_active => Ok(analytics),
            Some(_) => {
                self.remote_log.log(
                    "warn",
                    PACKAGE,
                    format!("stats requested for expired shortcode: {}", code),
                );
                Err(Self::not_found(code))
            }
            None => {
                self.remote_log.log(
                    "warn",
                    PACKAGE,
                    format!("stats requested for unknown shortcode: {}", code),
                );
                Err(Self::not_found(code))
            }
        }
    }

    fn not_found(code: &str) -> AppError {
        AppError::not_found("Shortcode not found", json!({ "shortcode": code }))
    }
}
