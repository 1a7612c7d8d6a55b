//! Loan Contract State Types
//!
//! Data structures mirroring the backend's contract records. The backend is
//! the single owner of contract state; everything here is a read-only
//! snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use satlend_core::{ContractId, Sats};

/// Every lifecycle stage of a collateralized loan contract.
///
/// Serialized as the exact variant name. These strings are a wire contract
/// with the backend; renaming a variant is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    // Request / approval phase
    Requested,
    RenewalRequested,
    Approved,
    Rejected,
    Cancelled,
    RequestExpired,
    ApprovalExpired,

    // Collateralization phase
    CollateralSeen,
    CollateralConfirmed,
    Undercollateralized,
    CollateralRecoverable,

    // Active phase
    PrincipalGiven,

    // Repayment phase
    RepaymentProvided,
    RepaymentConfirmed,

    // Closing variants
    Closing,
    ClosingByClaim,
    ClosingByLiquidation,
    ClosingByDefaulting,
    ClosingByRecovery,
    ClosedByClaim,
    ClosedByLiquidation,
    ClosedByDefaulting,
    ClosedByRecovery,

    // Dispute variants
    DisputeBorrowerStarted,
    DisputeLenderStarted,
    DisputeResolved,

    // Terminal states
    Closed,
    Defaulted,
    Extended,
}

impl ContractStatus {
    /// All statuses, for exhaustiveness checks in tests and tooling.
    pub const ALL: [ContractStatus; 29] = [
        Self::Requested,
        Self::RenewalRequested,
        Self::Approved,
        Self::Rejected,
        Self::Cancelled,
        Self::RequestExpired,
        Self::ApprovalExpired,
        Self::CollateralSeen,
        Self::CollateralConfirmed,
        Self::Undercollateralized,
        Self::CollateralRecoverable,
        Self::PrincipalGiven,
        Self::RepaymentProvided,
        Self::RepaymentConfirmed,
        Self::Closing,
        Self::ClosingByClaim,
        Self::ClosingByLiquidation,
        Self::ClosingByDefaulting,
        Self::ClosingByRecovery,
        Self::ClosedByClaim,
        Self::ClosedByLiquidation,
        Self::ClosedByDefaulting,
        Self::ClosedByRecovery,
        Self::DisputeBorrowerStarted,
        Self::DisputeLenderStarted,
        Self::DisputeResolved,
        Self::Closed,
        Self::Defaulted,
        Self::Extended,
    ];

    /// The exact wire identifier for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::RenewalRequested => "RenewalRequested",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
            Self::RequestExpired => "RequestExpired",
            Self::ApprovalExpired => "ApprovalExpired",
            Self::CollateralSeen => "CollateralSeen",
            Self::CollateralConfirmed => "CollateralConfirmed",
            Self::Undercollateralized => "Undercollateralized",
            Self::CollateralRecoverable => "CollateralRecoverable",
            Self::PrincipalGiven => "PrincipalGiven",
            Self::RepaymentProvided => "RepaymentProvided",
            Self::RepaymentConfirmed => "RepaymentConfirmed",
            Self::Closing => "Closing",
            Self::ClosingByClaim => "ClosingByClaim",
            Self::ClosingByLiquidation => "ClosingByLiquidation",
            Self::ClosingByDefaulting => "ClosingByDefaulting",
            Self::ClosingByRecovery => "ClosingByRecovery",
            Self::ClosedByClaim => "ClosedByClaim",
            Self::ClosedByLiquidation => "ClosedByLiquidation",
            Self::ClosedByDefaulting => "ClosedByDefaulting",
            Self::ClosedByRecovery => "ClosedByRecovery",
            Self::DisputeBorrowerStarted => "DisputeBorrowerStarted",
            Self::DisputeLenderStarted => "DisputeLenderStarted",
            Self::DisputeResolved => "DisputeResolved",
            Self::Closed => "Closed",
            Self::Defaulted => "Defaulted",
            Self::Extended => "Extended",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A loan contract snapshot as supplied by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Backend-assigned contract ID
    pub id: ContractId,
    /// Current lifecycle status
    pub status: ContractStatus,
    /// Principal in USD
    pub loan_amount: f64,
    /// Annual interest rate as a decimal (0.10 = 10%)
    pub interest_rate: f64,
    /// Locked collateral in satoshis
    pub collateral_sats: Sats,
    /// Loan term in days
    pub duration_days: u32,
    /// When the request was created
    pub created_at: DateTime<Utc>,
    /// Last backend-side state change
    pub updated_at: DateTime<Utc>,
    /// When the current phase expires, if it can
    pub expiry: Option<DateTime<Utc>>,
    /// Lender extension policy: longest extension offered, 0 = none
    #[serde(default)]
    pub extension_max_duration_days: u32,
    /// Lender extension policy: annual rate applied to extension days
    #[serde(default)]
    pub extension_interest_rate: f64,
    /// Lender extension policy: origination fee rate on extension
    #[serde(default)]
    pub extension_origination_fee: f64,
    /// Asset the principal is denominated in (e.g. "USD", "USDT")
    pub loan_asset: String,
    /// Follow-on contract spawned by an extension, once status is Extended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_to: Option<ContractId>,
}
