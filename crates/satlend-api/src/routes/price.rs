//! BTC/USD Price Feed Routes
//!
//! The price feed itself is an external collaborator; this cache holds its
//! most recent tick so dashboard classification can compute live LTV without
//! every request carrying a price.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::dto::{ApiError, PriceResponse, PriceUpdateRequest};
use crate::AppState;

/// Create price router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_price))
        .route("/", post(update_price))
}

/// GET /price - Latest cached tick
async fn get_price(
    State(state): State<AppState>,
) -> Result<Json<PriceResponse>, (StatusCode, Json<ApiError>)> {
    let tick = state.price().await.ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::not_found("No price tick received yet")),
        )
    })?;

    Ok(Json(PriceResponse {
        btc_usd: tick.btc_usd,
        updated_at: tick.updated_at,
    }))
}

/// POST /price - Record a new tick from the feed
async fn update_price(
    State(state): State<AppState>,
    Json(request): Json<PriceUpdateRequest>,
) -> Result<Json<PriceResponse>, (StatusCode, Json<ApiError>)> {
    let now = Utc::now();
    if !state.set_price(request.btc_usd, now).await {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("Price must be greater than 0")),
        ));
    }

    Ok(Json(PriceResponse {
        btc_usd: request.btc_usd,
        updated_at: now,
    }))
}
