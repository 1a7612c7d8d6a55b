//! Contract Classification Routes
//!
//! REST endpoints over the status model:
//! - POST /contracts/classify - Group/describe/action per contract
//! - POST /contracts/dashboard - Tab buckets sorted by (group, recency)
//!
//! Contract snapshots come from the backend through the frontend; this layer
//! only classifies them.

use axum::{extract::State, routing::post, Json, Router};

use loans::{
    bucket_by_tab, compute_current_ltv, describe_status, ltv_health, recommended_action,
    render_status_message, status_group, Contract, RecencyField, ViewerRole,
};

use crate::dto::{
    ClassifiedContract, ClassifyRequest, ClassifyResponse, DashboardRequest, DashboardResponse,
};
use crate::AppState;

/// Create contracts router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/classify", post(classify))
        .route("/dashboard", post(dashboard))
}

/// Classify a single snapshot for display
fn classify_one(contract: &Contract, role: ViewerRole, btc_price_usd: Option<f64>) -> ClassifiedContract {
    let group = status_group(contract.status);
    let description = describe_status(contract.status);
    let action = recommended_action(contract.status, role);
    let current_ltv = compute_current_ltv(
        Some(contract.loan_amount),
        Some(contract.collateral_sats),
        btc_price_usd,
    );

    ClassifiedContract {
        id: contract.id.clone(),
        status: contract.status,
        group,
        tab: group.tab_label().to_string(),
        title: description.title.to_string(),
        tone: description.tone,
        message: render_status_message(contract),
        action,
        action_label: action.map(|a| a.label().to_string()),
        current_ltv,
        ltv_health: current_ltv.map(ltv_health),
    }
}

/// Resolve the price to use: explicit request value, else the cached tick
async fn resolve_price(state: &AppState, explicit: Option<f64>) -> Option<f64> {
    match explicit {
        Some(p) => Some(p),
        None => state.price().await.map(|tick| tick.btc_usd),
    }
}

/// POST /contracts/classify - Classify a batch of contract snapshots
async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let price = resolve_price(&state, request.btc_price_usd).await;
    let contracts = request
        .contracts
        .iter()
        .map(|c| classify_one(c, request.role, price))
        .collect();

    Json(ClassifyResponse { contracts })
}

/// POST /contracts/dashboard - Bucket into tabs and sort for display
async fn dashboard(
    State(state): State<AppState>,
    Json(request): Json<DashboardRequest>,
) -> Json<DashboardResponse> {
    let price = resolve_price(&state, request.btc_price_usd).await;
    let recency = request.recency.unwrap_or(RecencyField::Updated);
    let role = request.role;

    let buckets = bucket_by_tab(request.contracts, recency);
    let classify_bucket = |contracts: Vec<Contract>| -> Vec<ClassifiedContract> {
        contracts
            .iter()
            .map(|c| classify_one(c, role, price))
            .collect()
    };

    Json(DashboardResponse {
        action_required: classify_bucket(buckets.action_required),
        open: classify_bucket(buckets.open),
        closed: classify_bucket(buckets.closed),
    })
}
