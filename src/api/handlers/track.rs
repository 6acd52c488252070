//! Handler for shipment tracking lookups.

use axum::{
    Json,
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, header},
};
use std::net::SocketAddr;

use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::track::{TrackQuery, TrackRequest, TrackingData};
use crate::domain::lookup_event::LookupEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::tracking_number::TrackingNumber;
use serde_json::json;

/// Tracks a shipment via query parameter.
///
/// # Endpoint
///
/// `GET /api/track?tracking_number=MAX123456789`
///
/// # Request Flow
///
/// 1. Validate and normalize the tracking number (trim, upper-case)
/// 2. Send a lookup event to the background log worker (fire-and-forget)
/// 3. Look up the shipment and derive its timeline
/// 4. Return the formatted payload inside the response envelope
///
/// # Errors
///
/// Returns 400 for a missing or malformed tracking number, 404 when no
/// shipment matches, 500 on store failure.
pub async fn track_get_handler(
    State(state): State<AppState>,
    Query(query): Query<TrackQuery>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Json<ApiResponse<TrackingData>>, AppError> {
    lookup(&state, query.tracking_number, &headers, addr).await
}

/// Tracks a shipment via JSON body.
///
/// # Endpoint
///
/// `POST /api/track` with `{"tracking_number": "MAX123456789"}`
///
/// The body is parsed leniently: a malformed or non-JSON body is treated as a
/// missing tracking number, so every outcome uses the response envelope.
/// Behavior is otherwise identical to [`track_get_handler`].
pub async fn track_post_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: String,
) -> Result<Json<ApiResponse<TrackingData>>, AppError> {
    let tracking_number = serde_json::from_str::<TrackRequest>(&body)
        .ok()
        .and_then(|b| b.tracking_number);

    lookup(&state, tracking_number, &headers, addr).await
}

async fn lookup(
    state: &AppState,
    raw: Option<String>,
    headers: &HeaderMap,
    addr: SocketAddr,
) -> Result<Json<ApiResponse<TrackingData>>, AppError> {
    let raw = raw
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            AppError::bad_request(
                "Tracking number is required",
                json!({ "parameter": "tracking_number" }),
            )
        })?;

    let tracking_number = TrackingNumber::parse(&raw)
        .map_err(|e| AppError::bad_request(e.to_string(), json!({ "input": raw })))?;

    // Every successfully validated lookup is logged, including ones that turn
    // out not to match a shipment. Queue-full drops are acceptable.
    let event = LookupEvent::new(
        tracking_number.as_str().to_string(),
        Some(addr.ip().to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
    );
    let _ = state.lookup_sender.try_send(event);
    metrics::counter!("tracking_lookups_total").increment(1);

    let report = state.tracking_service.track(&tracking_number).await?;

    Ok(Json(ApiResponse::ok(
        TrackingData::from_report(&report),
        "Tracking information retrieved successfully",
    )))
}
