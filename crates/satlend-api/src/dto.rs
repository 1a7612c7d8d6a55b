//! Data Transfer Objects for API requests and responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loans::{
    CollateralCalculation, Contract, ContractAction, ContractStatus, LoanTerms, LtvHealth,
    RecencyField, StatusGroup, Tone, ViewerRole,
};
use satlend_core::{ContractId, Network, Sats};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub network: Network,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }
}

// =============================================================================
// Price Feed DTOs
// =============================================================================

/// Update from the external BTC/USD price feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateRequest {
    pub btc_usd: f64,
}

/// Latest cached price tick
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub btc_usd: f64,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Loan Quote DTOs
// =============================================================================

/// Collateral quote response: the submitted terms plus derived figures
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub terms: LoanTerms,
    pub calculation: CollateralCalculation,
}

/// Current-LTV request. Optional fields mirror the UI, where any of these
/// may not have loaded yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LtvRequest {
    pub loan_amount_usd: Option<f64>,
    pub collateral_sats: Option<Sats>,
    /// Explicit price; falls back to the cached feed tick when absent
    pub current_btc_price_usd: Option<f64>,
}

/// Current-LTV response. `current_ltv` is null when the inputs do not allow
/// a computation - distinct from a legitimate LTV of 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LtvResponse {
    pub current_ltv: Option<f64>,
    pub health: Option<LtvHealth>,
}

// =============================================================================
// Extension DTOs
// =============================================================================

/// Extension quote request for an existing contract
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionQuoteRequest {
    pub contract: Contract,
    pub requested_days: u32,
    /// Evaluation time; defaults to the server clock when absent
    pub now: Option<DateTime<Utc>>,
}

/// Extension quote response, preview style: blended terms plus whether the
/// request would pass validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionQuoteResponse {
    pub can_execute: bool,
    pub error: Option<ApiError>,
    pub total_duration_days: u32,
    pub blended_interest_rate: f64,
    pub annualized_display_rate: f64,
}

// =============================================================================
// Contract Classification DTOs
// =============================================================================

/// Classification request for a batch of contract snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub contracts: Vec<Contract>,
    pub role: ViewerRole,
    /// Price for LTV columns; falls back to the cached feed tick
    pub btc_price_usd: Option<f64>,
}

/// One classified contract for list/dashboard rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedContract {
    pub id: ContractId,
    pub status: ContractStatus,
    pub group: StatusGroup,
    pub tab: String,
    pub title: String,
    pub tone: Tone,
    pub message: String,
    pub action: Option<ContractAction>,
    pub action_label: Option<String>,
    pub current_ltv: Option<f64>,
    pub ltv_health: Option<LtvHealth>,
}

/// Classification response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub contracts: Vec<ClassifiedContract>,
}

/// Dashboard request: classification plus tab bucketing and sorting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    pub contracts: Vec<Contract>,
    pub role: ViewerRole,
    /// Timestamp field for within-group recency; dashboards default to
    /// last update
    pub recency: Option<RecencyField>,
    pub btc_price_usd: Option<f64>,
}

/// Dashboard response: the three tabs, each sorted by (group, recency)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub action_required: Vec<ClassifiedContract>,
    pub open: Vec<ClassifiedContract>,
    pub closed: Vec<ClassifiedContract>,
}
