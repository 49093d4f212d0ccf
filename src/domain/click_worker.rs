//! Background worker recording clicks into the registry.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{NewClick, UNKNOWN};
use crate::domain::repositories::UrlRegistry;
use crate::infrastructure::geoip::GeoIpLookup;
use crate::infrastructure::remote_log::RemoteLogger;
use crate::utils::referrer::referrer_host;

const PACKAGE: &str = "click_worker";

/// Drains the click channel, enriching and recording each event.
///
/// For every event: resolve geolocation, normalize the user agent and
/// referrer, then append to the registry. A click targeting a code with
/// no analytics entry means the record was purged between lookup and
/// recording; that is an accepted race, logged as a consistency signal
/// and dropped, never a crash.
pub async fn run_click_worker<R: UrlRegistry>(
    mut rx: mpsc::Receiver<ClickEvent>,
    registry: Arc<R>,
    geoip: Arc<dyn GeoIpLookup>,
    remote_log: RemoteLogger,
) {
    while let Some(event) = rx.recv().await {
        let location = geoip.lookup(&event.ip).await;

        let click = NewClick {
            ip: event.ip,
            user_agent: event.user_agent.unwrap_or_else(|| UNKNOWN.to_string()),
            referrer: referrer_host(event.referer.as_deref()),
            location,
        };

        match registry.record_click(&event.code, click).await {
            Ok(true) => {
                tracing::debug!(code = %event.code, "click recorded");
                remote_log.log("info", PACKAGE, format!("click recorded: {}", event.code));
                metrics::counter!("clicks_recorded_total").increment(1);
            }
            Ok(false) => {
                tracing::error!(
                    code = %event.code,
                    "click for a shortcode with no analytics entry, dropping"
                );
                remote_log.log(
                    "error",
                    PACKAGE,
                    format!("analytics entry missing for shortcode: {}", event.code),
                );
            }
            Err(e) => {
                tracing::error!(code = %event.code, "failed to record click: {}", e);
            }
        }
    }

    tracing::debug!("click channel closed, worker exiting");
}
