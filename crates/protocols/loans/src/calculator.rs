//! Loan Economics Calculator
//!
//! Pure math functions for collateral, fee, interest, and LTV health
//! calculations. No I/O - just calculations.
//!
//! Intermediate USD amounts stay in floating point; only the final satoshi
//! conversions round, and always upward. Rounding down here would
//! under-collateralize the protocol by up to a satoshi per figure.

use serde::{Deserialize, Serialize};

use crate::constants::{health, SATS_PER_BTC, YEAR_DAYS};
use satlend_core::Sats;

/// Input terms for a loan quote. Constructed fresh per calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    /// Principal in USD
    pub loan_amount_usd: f64,
    /// Initial loan-to-value ratio, 0 < ltv <= 1
    pub ltv: f64,
    /// BTC price in USD at quote time
    pub btc_price_usd: f64,
    /// Annual interest rate as a decimal (0.10 = 10%)
    pub interest_rate_annual: f64,
    /// Loan term in days
    pub duration_days: u32,
    /// Origination fee rate as a decimal on the principal
    pub origination_fee_rate: f64,
}

impl LoanTerms {
    /// Check the validity preconditions for [`compute_collateral`]
    pub fn is_valid(&self) -> bool {
        self.ltv > 0.0
            && self.ltv <= 1.0
            && self.btc_price_usd > 0.0
            && self.loan_amount_usd >= 0.0
            && self.interest_rate_annual >= 0.0
            && self.duration_days > 0
            && self.origination_fee_rate >= 0.0
    }
}

/// Derived collateral/fee/interest figures for a set of loan terms.
///
/// An all-zero value is the invalid-input sentinel, not a zero-cost loan;
/// check [`CollateralCalculation::is_zero`] before displaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollateralCalculation {
    pub collateral_value_usd: f64,
    pub collateral_sats: Sats,
    pub origination_fee_usd: f64,
    pub origination_fee_sats: Sats,
    /// Interest rate effective over the term: annual rate scaled by duration
    pub actual_interest_rate: f64,
    pub total_interest_usd: f64,
    pub total_interest_sats: Sats,
    /// Principal plus interest, in sats at the quoted price
    pub total_value_owed_sats: Sats,
    /// Collateral for principal plus interest, plus the origination fee
    pub total_value_to_deposit_usd: f64,
    pub total_value_to_deposit_sats: Sats,
}

impl CollateralCalculation {
    /// True for the invalid-input sentinel
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Convert a USD amount to satoshis at the given price, rounding up
fn usd_to_sats_ceil(usd: f64, btc_price_usd: f64) -> Sats {
    (usd / btc_price_usd * SATS_PER_BTC as f64).ceil() as Sats
}

/// Derive collateral, fee, and interest figures from loan terms.
///
/// Returns the all-zero sentinel when any precondition fails (ltv outside
/// (0, 1], non-positive price or duration, negative amount or rates).
///
/// Example: $1000 at 50% LTV, $50,000/BTC, 10% annual over 30 days with a
/// 1.5% origination fee requires $2000 of collateral (4,000,000 sats).
pub fn compute_collateral(terms: &LoanTerms) -> CollateralCalculation {
    if !terms.is_valid() {
        tracing::debug!(?terms, "invalid loan terms, returning zero calculation");
        return CollateralCalculation::default();
    }

    let collateral_value_usd = terms.loan_amount_usd / terms.ltv;
    let collateral_sats = usd_to_sats_ceil(collateral_value_usd, terms.btc_price_usd);

    let origination_fee_usd = terms.loan_amount_usd * terms.origination_fee_rate;
    let origination_fee_sats = usd_to_sats_ceil(origination_fee_usd, terms.btc_price_usd);

    let actual_interest_rate = terms.interest_rate_annual * (terms.duration_days as f64 / YEAR_DAYS);
    let total_interest_usd = terms.loan_amount_usd * actual_interest_rate;
    let total_interest_sats = usd_to_sats_ceil(total_interest_usd, terms.btc_price_usd);

    let total_value_owed_usd = terms.loan_amount_usd + total_interest_usd;
    let total_value_owed_sats = usd_to_sats_ceil(total_value_owed_usd, terms.btc_price_usd);

    let total_value_to_deposit_usd = total_value_owed_usd / terms.ltv + origination_fee_usd;
    let total_value_to_deposit_sats = usd_to_sats_ceil(total_value_to_deposit_usd, terms.btc_price_usd);

    CollateralCalculation {
        collateral_value_usd,
        collateral_sats,
        origination_fee_usd,
        origination_fee_sats,
        actual_interest_rate,
        total_interest_usd,
        total_interest_sats,
        total_value_owed_sats,
        total_value_to_deposit_usd,
        total_value_to_deposit_sats,
    }
}

/// Compute the current loan-to-value ratio from live price data.
///
/// Returns `None` when any input is missing, the loan amount is negative,
/// the price is non-positive, or the collateral is zero - "cannot currently
/// be computed", distinct from a legitimate LTV of 0.
///
/// LTV rises as the BTC price falls: a price drop makes the loan riskier.
pub fn compute_current_ltv(
    loan_amount_usd: Option<f64>,
    collateral_sats: Option<Sats>,
    current_btc_price_usd: Option<f64>,
) -> Option<f64> {
    let loan_amount_usd = loan_amount_usd?;
    let collateral_sats = collateral_sats?;
    let price = current_btc_price_usd?;

    if loan_amount_usd < 0.0 || price <= 0.0 || collateral_sats == 0 {
        return None;
    }

    let collateral_value_usd = (collateral_sats as f64 / SATS_PER_BTC as f64) * price;
    Some(loan_amount_usd / collateral_value_usd)
}

/// LTV status for UI color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LtvHealth {
    Healthy, // Green: < 0.70
    Warning, // Amber: >= 0.70 and < 0.85
    Danger,  // Red: >= 0.85
}

/// Classify a current LTV against the platform thresholds
pub fn ltv_health(current_ltv: f64) -> LtvHealth {
    if current_ltv >= health::DANGER_LTV {
        LtvHealth::Danger
    } else if current_ltv >= health::WARNING_LTV {
        LtvHealth::Warning
    } else {
        LtvHealth::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_terms() -> LoanTerms {
        LoanTerms {
            loan_amount_usd: 1000.0,
            ltv: 0.5,
            btc_price_usd: 50_000.0,
            interest_rate_annual: 0.10,
            duration_days: 30,
            origination_fee_rate: 0.015,
        }
    }

    #[test]
    fn test_worked_example() {
        let calc = compute_collateral(&sample_terms());

        assert!((calc.collateral_value_usd - 2000.0).abs() < 1e-9);
        assert_eq!(calc.collateral_sats, 4_000_000);

        assert!((calc.origination_fee_usd - 15.0).abs() < 1e-9);
        assert_eq!(calc.origination_fee_sats, 30_000);

        // 0.10 * 30 / 365
        assert!((calc.actual_interest_rate - 0.008219178).abs() < 1e-8);
        assert!((calc.total_interest_usd - 8.219178).abs() < 1e-5);
        assert_eq!(calc.total_interest_sats, 16_439);

        // ceil((1000 + 8.2192) / 50000 * 1e8)
        assert_eq!(calc.total_value_owed_sats, 2_016_439);

        // (1000 + 8.2192) / 0.5 + 15
        assert!((calc.total_value_to_deposit_usd - 2031.438356).abs() < 1e-5);
        assert_eq!(calc.total_value_to_deposit_sats, 4_062_877);
    }

    #[test]
    fn test_invalid_input_sentinel() {
        let mut terms = sample_terms();
        terms.ltv = 0.0;
        assert!(compute_collateral(&terms).is_zero());

        let mut terms = sample_terms();
        terms.ltv = 1.5;
        assert!(compute_collateral(&terms).is_zero());

        let mut terms = sample_terms();
        terms.btc_price_usd = 0.0;
        assert!(compute_collateral(&terms).is_zero());

        let mut terms = sample_terms();
        terms.duration_days = 0;
        assert!(compute_collateral(&terms).is_zero());

        let mut terms = sample_terms();
        terms.loan_amount_usd = -1.0;
        assert!(compute_collateral(&terms).is_zero());
    }

    #[test]
    fn test_valid_result_is_not_sentinel() {
        let calc = compute_collateral(&sample_terms());
        assert!(!calc.is_zero());
    }

    #[test]
    fn test_ceiling_never_under_rounds() {
        let cases = [
            sample_terms(),
            LoanTerms {
                loan_amount_usd: 333.33,
                ltv: 0.7,
                btc_price_usd: 61_234.56,
                interest_rate_annual: 0.085,
                duration_days: 90,
                origination_fee_rate: 0.02,
            },
            LoanTerms {
                loan_amount_usd: 25_000.0,
                ltv: 1.0,
                btc_price_usd: 97_111.0,
                interest_rate_annual: 0.0,
                duration_days: 365,
                origination_fee_rate: 0.0,
            },
        ];

        for terms in cases {
            let calc = compute_collateral(&terms);
            let exact =
                calc.collateral_value_usd / terms.btc_price_usd * SATS_PER_BTC as f64;
            // Never below the exact value, and within one satoshi above it
            assert!(calc.collateral_sats as f64 >= exact - 1e-6);
            assert!((calc.collateral_sats as f64 - exact) < 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_current_ltv() {
        // 4M sats at $50k = $2000 collateral against a $1000 loan
        let ltv = compute_current_ltv(Some(1000.0), Some(4_000_000), Some(50_000.0)).unwrap();
        assert!((ltv - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_current_ltv_monotonic_in_price() {
        let at = |price: f64| {
            compute_current_ltv(Some(1000.0), Some(4_000_000), Some(price)).unwrap()
        };
        // Price up => LTV strictly down
        assert!(at(40_000.0) > at(50_000.0));
        assert!(at(50_000.0) > at(60_000.0));
    }

    #[test]
    fn test_current_ltv_missing_input_sentinel() {
        assert!(compute_current_ltv(None, Some(4_000_000), Some(50_000.0)).is_none());
        assert!(compute_current_ltv(Some(1000.0), None, Some(50_000.0)).is_none());
        assert!(compute_current_ltv(Some(1000.0), Some(4_000_000), None).is_none());
        assert!(compute_current_ltv(Some(-1.0), Some(4_000_000), Some(50_000.0)).is_none());
        assert!(compute_current_ltv(Some(1000.0), Some(4_000_000), Some(0.0)).is_none());
        assert!(compute_current_ltv(Some(1000.0), Some(0), Some(50_000.0)).is_none());
    }

    #[test]
    fn test_ltv_health_bands() {
        assert_eq!(ltv_health(0.5), LtvHealth::Healthy);
        assert_eq!(ltv_health(0.70), LtvHealth::Warning);
        assert_eq!(ltv_health(0.84), LtvHealth::Warning);
        assert_eq!(ltv_health(0.85), LtvHealth::Danger);
        assert_eq!(ltv_health(1.2), LtvHealth::Danger);
    }
}
