//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 60,          // optional, minutes, default 30
///   "shortcode": "promo1"    // optional, 3-20 alphanumeric chars
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "https://snip.example.com/promo1",
///   "expiry": "2026-08-07T13:37:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 for an invalid URL, shortcode format, or validity
/// - 409 when the requested shortcode is already in use
/// - 500 when shortcode auto-generation exhausts its attempts
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let record = state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode)
        .await?;

    let response = ShortenResponse {
        short_link: state.link_service.short_url(&record.code),
        expiry: record.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
