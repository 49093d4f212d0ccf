//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. All knobs have working defaults; nothing is required.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base used when building short links
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity applied when a create request
//!   omits one (default: 30)
//! - `CLEANUP_INTERVAL_SECONDS` - Period of the expired-record sweep
//!   (default: 3600)
//! - `CLICK_QUEUE_CAPACITY` - Click event buffer size (default: 10000, min: 100)
//! - `BEHIND_PROXY` - When true, client IPs are read from
//!   X-Forwarded-For / X-Real-IP headers. Enable only behind a trusted
//!   reverse proxy.
//! - `LOG_SINK_URL` - Remote log collector endpoint. Unset disables
//!   remote forwarding; local tracing is unaffected.
//! - `LOG_QUEUE_CAPACITY` - Remote log event buffer size (default: 1000)

use anyhow::Result;
use std::env;

/// Upper bound for a link validity period: one calendar year in minutes.
pub const MAX_VALIDITY_MINUTES: i64 = 525_600;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub default_validity_minutes: i64,
    pub cleanup_interval_seconds: u64,
    pub click_queue_capacity: usize,
    /// When true, client IP extraction reads X-Forwarded-For / X-Real-IP.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Remote log collector endpoint; `None` disables forwarding.
    pub log_sink_url: Option<String>,
    pub log_queue_capacity: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let cleanup_interval_seconds = env::var("CLEANUP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let click_queue_capacity = env::var("CLICK_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let log_sink_url = env::var("LOG_SINK_URL").ok().filter(|v| !v.is_empty());

        let log_queue_capacity = env::var("LOG_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_validity_minutes,
            cleanup_interval_seconds,
            click_queue_capacity,
            behind_proxy,
            log_sink_url,
            log_queue_capacity,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not an absolute http(s) URL
    /// - `default_validity_minutes` is outside `1..=525600`
    /// - `cleanup_interval_seconds` is zero
    /// - `click_queue_capacity` is below 100 or above 1000000
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.default_validity_minutes < 1 || self.default_validity_minutes > MAX_VALIDITY_MINUTES
        {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be between 1 and {}, got {}",
                MAX_VALIDITY_MINUTES,
                self.default_validity_minutes
            );
        }

        if self.cleanup_interval_seconds == 0 {
            anyhow::bail!("CLEANUP_INTERVAL_SECONDS must be greater than 0");
        }

        if self.click_queue_capacity < 100 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be at least 100, got {}",
                self.click_queue_capacity
            );
        }

        if self.click_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.click_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.log_queue_capacity == 0 {
            anyhow::bail!("LOG_QUEUE_CAPACITY must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether remote log forwarding is enabled.
    pub fn is_log_sink_enabled(&self) -> bool {
        self.log_sink_url.is_some()
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!(
            "  Cleanup interval: {} seconds",
            self.cleanup_interval_seconds
        );
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);

        if let Some(ref url) = self.log_sink_url {
            tracing::info!("  Remote log sink: {} (enabled)", url);
        } else {
            tracing::info!("  Remote log sink: disabled");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            default_validity_minutes: 30,
            cleanup_interval_seconds: 3600,
            click_queue_capacity: 10_000,
            behind_proxy: false,
            log_sink_url: None,
            log_queue_capacity: 1000,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.base_url = "ftp://short.test".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://short.test".to_string();

        config.default_validity_minutes = 0;
        assert!(config.validate().is_err());
        config.default_validity_minutes = MAX_VALIDITY_MINUTES + 1;
        assert!(config.validate().is_err());
        config.default_validity_minutes = MAX_VALIDITY_MINUTES;
        assert!(config.validate().is_ok());

        config.cleanup_interval_seconds = 0;
        assert!(config.validate().is_err());
        config.cleanup_interval_seconds = 60;

        config.click_queue_capacity = 50;
        assert!(config.validate().is_err());
        config.click_queue_capacity = 10_000;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
            env::remove_var("CLEANUP_INTERVAL_SECONDS");
            env::remove_var("LOG_SINK_URL");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.default_validity_minutes, 30);
        assert_eq!(config.cleanup_interval_seconds, 3600);
        assert!(config.log_sink_url.is_none());
        assert!(!config.is_log_sink_enabled());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("BASE_URL", "https://snip.example.com");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "90");
            env::set_var("LOG_SINK_URL", "http://logs.example.com/ingest");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.base_url, "https://snip.example.com");
        assert_eq!(config.default_validity_minutes, 90);
        assert_eq!(
            config.log_sink_url.as_deref(),
            Some("http://logs.example.com/ingest")
        );
        assert!(config.is_log_sink_enabled());

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
            env::remove_var("LOG_SINK_URL");
        }
    }

    #[test]
    #[serial]
    fn test_empty_log_sink_url_disables_forwarding() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LOG_SINK_URL", "");
        }

        let config = Config::from_env().unwrap();
        assert!(config.log_sink_url.is_none());

        // Cleanup
        unsafe {
            env::remove_var("LOG_SINK_URL");
        }
    }
}
