//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRegistry;
use crate::error::AppError;
use crate::infrastructure::remote_log::RemoteLogger;
use crate::utils::code_generator::{generate_code, validate_shortcode, validate_validity_minutes};
use crate::utils::url_validator::{is_internal_host, validate_url};
use serde_json::json;

const PACKAGE: &str = "link_service";

/// Service for creating and resolving shortened links.
///
/// Validates everything at this boundary so the registry can stay a pure
/// store: target URL shape, shortcode format, validity bounds, and the
/// bounded retry loop for auto-generated codes.
pub struct LinkService<R: UrlRegistry> {
    registry: Arc<R>,
    remote_log: RemoteLogger,
    base_url: String,
    default_validity_minutes: i64,
}

impl<R: UrlRegistry> LinkService<R> {
    /// Creates a new link service.
    pub fn new(
        registry: Arc<R>,
        remote_log: RemoteLogger,
        base_url: String,
        default_validity_minutes: i64,
    ) -> Self {
        Self {
            registry,
            remote_log,
            base_url,
            default_validity_minutes,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - The original URL to shorten
    /// - `validity_minutes` - Lifetime in minutes; the configured default
    ///   (30 unless overridden) applies when omitted
    /// - `shortcode` - Optional caller-chosen code (validated if provided)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a bad URL, shortcode, or
    /// validity; [`AppError::Conflict`] when the requested code is taken
    /// (expired-but-unpurged codes included); [`AppError::Exhausted`] when
    /// ten generated candidates collide in a row.
    pub async fn create_short_link(
        &self,
        url: String,
        validity_minutes: Option<i64>,
        shortcode: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        let parsed = validate_url(&url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if is_internal_host(&parsed) {
            // Accepted, but worth an audit trail.
            let host = parsed.host_str().unwrap_or_default();
            tracing::warn!("shortening URL with internal host: {}", host);
            self.remote_log.log(
                "warn",
                PACKAGE,
                format!("internal host accepted for shortening: {}", host),
            );
        }

        let validity = validity_minutes.unwrap_or(self.default_validity_minutes);
        validate_validity_minutes(validity)?;

        let record = match shortcode {
            Some(code) => {
                validate_shortcode(&code)?;
                self.registry
                    .create(NewUrlRecord {
                        code,
                        original_url: url,
                        validity_minutes: validity,
                    })
                    .await?
            }
            None => self.create_with_generated_code(url, validity).await?,
        };

        tracing::info!(code = %record.code, "short link created");
        self.remote_log.log(
            "info",
            PACKAGE,
            format!("short link created: {} -> {}", record.code, record.original_url),
        );
        metrics::counter!("links_created_total").increment(1);

        Ok(record)
    }

    /// Resolves a shortcode to its active record.
    ///
    /// Absent and expired codes are indistinguishable to the caller; both
    /// surface as [`AppError::NotFound`]. The two cases are told apart
    /// only for log events.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        if let Some(record) = self.registry.find_active(code).await? {
            return Ok(record);
        }

        if self.registry.exists(code).await? {
            self.remote_log
                .log("warn", PACKAGE, format!("expired shortcode accessed: {}", code));
        } else {
            self.remote_log
                .log("warn", PACKAGE, format!("unknown shortcode accessed: {}", code));
        }

        Err(AppError::not_found(
            "Shortcode not found",
            json!({ "shortcode": code }),
        ))
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Claims a random code through the registry's atomic create.
    ///
    /// Attempts up to 10 candidates. With 62^6 possible codes, losing all
    /// ten races means the code space is close to exhausted, so the
    /// failure is surfaced as an operational alarm rather than retried
    /// forever.
    async fn create_with_generated_code(
        &self,
        url: String,
        validity_minutes: i64,
    ) -> Result<UrlRecord, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let candidate = generate_code();

            match self
                .registry
                .create(NewUrlRecord {
                    code: candidate,
                    original_url: url.clone(),
                    validity_minutes,
                })
                .await
            {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict { .. }) => continue,
                Err(other) => return Err(other),
            }
        }

        tracing::error!("shortcode generation exhausted after {} attempts", MAX_ATTEMPTS);
        self.remote_log.log(
            "error",
            PACKAGE,
            format!("shortcode generation exhausted after {} attempts", MAX_ATTEMPTS),
        );

        Err(AppError::exhausted(
            "Failed to generate a unique shortcode",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
