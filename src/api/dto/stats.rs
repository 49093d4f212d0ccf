//! DTOs for the link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ClickRecord, GeoLocation};
use crate::domain::repositories::UrlAnalytics;

/// Detailed statistics for a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub is_active: bool,
    pub total_clicks: u64,
    pub click_details: Vec<ClickDetail>,
}

/// A single recorded click.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickDetail {
    pub timestamp: DateTime<Utc>,
    pub ip: String,
    pub user_agent: String,
    pub referrer: String,
    pub location: GeoLocation,
}

impl From<ClickRecord> for ClickDetail {
    fn from(click: ClickRecord) -> Self {
        Self {
            timestamp: click.clicked_at,
            ip: click.ip,
            user_agent: click.user_agent,
            referrer: click.referrer,
            location: click.location,
        }
    }
}

impl From<UrlAnalytics> for StatsResponse {
    fn from(analytics: UrlAnalytics) -> Self {
        Self {
            shortcode: analytics.record.code,
            original_url: analytics.record.original_url,
            created_at: analytics.record.created_at,
            expiry_date: analytics.record.expires_at,
            is_active: analytics.is_active,
            total_clicks: analytics.total_clicks,
            click_details: analytics.clicks.into_iter().map(ClickDetail::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlRecord;

    #[test]
    fn test_stats_response_uses_camel_case_field_names() {
        let analytics = UrlAnalytics {
            record: UrlRecord::new("abc123".to_string(), "https://example.com".to_string(), 30),
            total_clicks: 0,
            clicks: Vec::new(),
            is_active: true,
        };

        let json = serde_json::to_value(StatsResponse::from(analytics)).unwrap();

        assert!(json.get("shortcode").is_some());
        assert!(json.get("originalUrl").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("expiryDate").is_some());
        assert!(json.get("isActive").is_some());
        assert!(json.get("totalClicks").is_some());
        assert!(json.get("clickDetails").is_some());
    }
}
