//! Satlend Loan Protocol Core
//!
//! Borrowers lock BTC collateral against USD-denominated loans; lenders fund
//! them and collect interest. This crate holds the two pieces every surface
//! shares:
//!
//! - the economics engine: pure arithmetic turning loan terms into collateral,
//!   fee, and interest figures, plus live loan-to-value health
//! - the contract status model: one canonical classification table for every
//!   lifecycle status, driving sort order, tab membership, user-facing text,
//!   and action gating
//!
//! The backend owns contract state and executes transitions; this crate only
//! classifies snapshots and computes values.

pub mod calculator;
pub mod constants;
pub mod extension;
pub mod state;
pub mod status;

pub use calculator::{
    compute_collateral, compute_current_ltv, ltv_health, CollateralCalculation, LoanTerms,
    LtvHealth,
};
pub use extension::{
    extension_terms, is_extension_window_open, validate_extension_request, ExtensionTerms,
};
pub use state::{Contract, ContractStatus};
pub use status::{
    bucket_by_tab, describe_status, is_action_required, is_contract_closed, is_contract_open,
    recommended_action, render_status_message, sort_for_display, status_group, ContractAction,
    RecencyField, StatusDescription, StatusGroup, TabBuckets, Tone, ViewerRole,
};
