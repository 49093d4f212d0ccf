//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;
use crate::utils::code_generator::validate_shortcode;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Click Tracking
///
/// A click event is pushed to a bounded channel for async processing
/// after the lookup succeeds. If the queue is full the click is dropped;
/// the redirect itself never waits on analytics.
///
/// # Errors
///
/// - 400 when the shortcode is malformed
/// - 404 when the shortcode is unknown or expired
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    validate_shortcode(&code)?;

    let record = state.link_service.resolve(&code).await?;

    let ip = client_ip(&headers, addr, state.behind_proxy);
    let event = ClickEvent::new(
        code,
        ip,
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    let _ = state.click_sender.try_send(event);
    metrics::counter!("redirects_total").increment(1);

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    ))
}
