//! Loan Extension Terms & Eligibility
//!
//! Extending an active loan spawns a follow-on contract on the backend. This
//! module computes the blended terms shown to the borrower and validates an
//! extension request against the lender's policy.
//!
//! "Now" is always an explicit parameter so eligibility windows stay
//! deterministic and testable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{extension::MIN_EXTENSION_DAYS, YEAR_DAYS};
use crate::state::Contract;
use crate::status::is_contract_open;
use satlend_core::ProtocolError;

/// Blended terms for an extended loan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionTerms {
    /// Original term plus extension, in days
    pub total_duration_days: u32,
    /// Duration-weighted average of the original and extension annual rates
    pub blended_interest_rate: f64,
    /// Blended rate divided by (YEAR_DAYS / total duration) for display
    pub annualized_display_rate: f64,
}

/// Blend original and extension interest rates, weighted by duration.
///
/// `blended = (ext_rate * ext_days + orig_rate * orig_days) / (ext_days + orig_days)`
///
/// A zero total duration yields zeroed terms; the blend is undefined and the
/// request cannot pass validation anyway.
pub fn extension_terms(
    original_rate: f64,
    original_duration_days: u32,
    extension_rate: f64,
    extension_days: u32,
) -> ExtensionTerms {
    let total_duration_days = original_duration_days + extension_days;
    if total_duration_days == 0 {
        return ExtensionTerms {
            total_duration_days: 0,
            blended_interest_rate: 0.0,
            annualized_display_rate: 0.0,
        };
    }
    let blended_interest_rate = (extension_rate * extension_days as f64
        + original_rate * original_duration_days as f64)
        / total_duration_days as f64;
    let annualized_display_rate = blended_interest_rate / (YEAR_DAYS / total_duration_days as f64);

    ExtensionTerms {
        total_duration_days,
        blended_interest_rate,
        annualized_display_rate,
    }
}

/// Check whether the extension window has opened: at least half the original
/// term must have elapsed.
pub fn is_extension_window_open(
    created_at: DateTime<Utc>,
    duration_days: u32,
    now: DateTime<Utc>,
) -> bool {
    let days_passed = (now - created_at).num_days();
    // days_passed >= duration / 2, without integer-division truncation
    days_passed >= 0 && 2 * days_passed >= duration_days as i64
}

/// Validate an extension request against the contract's lender policy.
///
/// Checks, in order: the contract is still open, the lender offers extensions
/// at all, the half-term window has opened, and the requested days fall in
/// `[MIN_EXTENSION_DAYS, extension_max_duration_days]`.
pub fn validate_extension_request(
    contract: &Contract,
    requested_days: u32,
    now: DateTime<Utc>,
) -> Result<(), ProtocolError> {
    if !is_contract_open(contract.status) {
        return Err(ProtocolError::ActionNotAllowed {
            reason: format!("contract {} is closed", contract.id),
        });
    }

    if contract.extension_max_duration_days == 0 {
        return Err(ProtocolError::ExtensionNotOffered);
    }

    if !is_extension_window_open(contract.created_at, contract.duration_days, now) {
        let days_passed = (now - contract.created_at).num_days();
        return Err(ProtocolError::ExtensionWindowClosed {
            days_passed,
            required: (contract.duration_days as i64 + 1) / 2,
        });
    }

    if requested_days < MIN_EXTENSION_DAYS || requested_days > contract.extension_max_duration_days
    {
        return Err(ProtocolError::ExtensionOutOfRange {
            requested: requested_days,
            min: MIN_EXTENSION_DAYS,
            max: contract.extension_max_duration_days,
        });
    }

    Ok(())
}
