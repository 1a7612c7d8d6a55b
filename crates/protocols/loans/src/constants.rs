//! Loan Protocol Constants
//!
//! Fixed platform parameters. There is deliberately no runtime configuration
//! for these: every front-end and the backend must agree on them.

pub use satlend_core::constants::{SATS_PER_BTC, YEAR_DAYS};

/// Extension policy bounds
pub mod extension {
    /// Shortest extension a borrower may request, in days
    pub const MIN_EXTENSION_DAYS: u32 = 7;
}

/// LTV thresholds for UI color coding
///
/// Current LTV = loan value / collateral value, so it rises as the BTC price
/// falls. Thresholds are absolute LTV levels:
/// - < WARNING_LTV: safe position, displayed in green
/// - >= WARNING_LTV and < DANGER_LTV: at risk, displayed in amber/yellow
/// - >= DANGER_LTV: close to liquidation, displayed in red
pub mod health {
    pub const WARNING_LTV: f64 = 0.70;
    pub const DANGER_LTV: f64 = 0.85;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_constants() {
        assert_eq!(SATS_PER_BTC, 100_000_000);
        assert_eq!(YEAR_DAYS, 365.0);
        assert_eq!(extension::MIN_EXTENSION_DAYS, 7);
    }

    #[test]
    fn test_health_thresholds_ordered() {
        assert!(health::WARNING_LTV < health::DANGER_LTV);
        assert!(health::DANGER_LTV < 1.0);
    }
}
