//! API route configuration.

use crate::api::handlers::{track_get_handler, track_post_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Tracking API routes.
///
/// # Endpoints
///
/// - `GET  /track` - Look up a shipment by `tracking_number` query parameter
/// - `POST /track` - Look up a shipment by JSON body field
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/track", get(track_get_handler).post(track_post_handler))
}
