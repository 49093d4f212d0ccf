//! Handler for the link statistics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_shortcode;

/// Returns click statistics for a short link.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Errors
///
/// - 400 when the shortcode is not 3-20 alphanumeric characters; the
///   registry is never consulted for malformed codes
/// - 404 when the shortcode is unknown or expired (indistinguishable)
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    validate_shortcode(&code)?;

    let analytics = state.stats_service.get_stats(&code).await?;

    Ok(Json(StatsResponse::from(analytics)))
}
