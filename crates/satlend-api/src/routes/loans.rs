//! Loan Economics Routes
//!
//! REST endpoints over the pure economics engine:
//! - POST /loans/quote - Collateral/fee/interest figures for submitted terms
//! - POST /loans/ltv - Current LTV and health from live price data
//! - POST /loans/extension/quote - Blended extension terms and eligibility

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::Utc;

use loans::{compute_collateral, compute_current_ltv, extension, ltv_health, LoanTerms};
use satlend_core::ProtocolError;

use crate::dto::{
    ApiError, ExtensionQuoteRequest, ExtensionQuoteResponse, LtvRequest, LtvResponse,
    QuoteResponse,
};
use crate::AppState;

/// Create loans router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/ltv", post(current_ltv))
        .route("/extension/quote", post(extension_quote))
}

/// POST /loans/quote - Derive collateral figures from loan terms
///
/// The engine's all-zero sentinel maps to HTTP 400 here; it never reaches
/// the frontend looking like a free loan.
async fn quote(
    State(_state): State<AppState>,
    Json(terms): Json<LoanTerms>,
) -> Result<Json<QuoteResponse>, (StatusCode, Json<ApiError>)> {
    let calculation = compute_collateral(&terms);
    if calculation.is_zero() {
        let err = ProtocolError::InvalidTerms {
            message: "ltv must be in (0, 1], price and duration must be positive, amounts and rates non-negative".to_string(),
        };
        return Err((
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST),
            Json(ApiError::new(err.error_code(), err.to_string())),
        ));
    }

    Ok(Json(QuoteResponse { terms, calculation }))
}

/// POST /loans/ltv - Current LTV from live price data
///
/// Missing or invalid inputs yield a null LTV in a 200 response; "cannot
/// currently be computed" is an expected UI state, not an error.
async fn current_ltv(
    State(state): State<AppState>,
    Json(request): Json<LtvRequest>,
) -> Json<LtvResponse> {
    let price = match request.current_btc_price_usd {
        Some(p) => Some(p),
        None => state.price().await.map(|tick| tick.btc_usd),
    };

    let current_ltv =
        compute_current_ltv(request.loan_amount_usd, request.collateral_sats, price);

    Json(LtvResponse {
        current_ltv,
        health: current_ltv.map(ltv_health),
    })
}

/// POST /loans/extension/quote - Blended terms and eligibility for extending
async fn extension_quote(
    State(_state): State<AppState>,
    Json(request): Json<ExtensionQuoteRequest>,
) -> Json<ExtensionQuoteResponse> {
    let contract = &request.contract;
    let now = request.now.unwrap_or_else(Utc::now);

    let terms = extension::extension_terms(
        contract.interest_rate,
        contract.duration_days,
        contract.extension_interest_rate,
        request.requested_days,
    );

    let error = extension::validate_extension_request(contract, request.requested_days, now)
        .err()
        .map(|e| ApiError::new(e.error_code(), e.to_string()));

    Json(ExtensionQuoteResponse {
        can_execute: error.is_none(),
        error,
        total_duration_days: terms.total_duration_days,
        blended_interest_rate: terms.blended_interest_rate,
        annualized_display_rate: terms.annualized_display_rate,
    })
}
