//! Financial risk calculation
//!
//! Step function over the vendor's 0–100 financial health score.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use types::numeric::Score;
use types::vendor::VendorProfile;

/// Financial health bands (exclusive upper bound) and their risk scores.
///
/// | financial health | risk |
/// |------------------|------|
/// | < 50             | 0.80 |
/// | 50 – 59          | 0.60 |
/// | 60 – 69          | 0.40 |
/// | 70 – 79          | 0.25 |
/// | >= 80            | 0.10 |
const FINANCIAL_BANDS: [(u8, Decimal); 4] = [
    (50, dec!(0.80)),
    (60, dec!(0.60)),
    (70, dec!(0.40)),
    (80, dec!(0.25)),
];

/// Risk for vendors at or above the last band
const FINANCIAL_RISK_FLOOR: Decimal = dec!(0.10);

/// Map a raw financial health value to its risk score.
pub fn financial_risk_for(financial_health: u8) -> Score {
    let risk = FINANCIAL_BANDS
        .iter()
        .find(|(upper, _)| financial_health < *upper)
        .map_or(FINANCIAL_RISK_FLOOR, |(_, risk)| *risk);
    Score::capped(risk)
}

/// Financial risk for a vendor.
pub fn financial_risk(vendor: &VendorProfile) -> Score {
    let score = financial_risk_for(vendor.financial_health);

    if vendor.is_high_risk_financially() {
        tracing::warn!(
            vendor_id = %vendor.vendor_id,
            financial_health = vendor.financial_health,
            "high financial risk detected"
        );
    } else {
        tracing::debug!(
            vendor_id = %vendor.vendor_id,
            financial_health = vendor.financial_health,
            low_risk = vendor.is_low_risk_financially(),
            risk = %score,
            "financial risk computed"
        );
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(financial_risk_for(0).as_decimal(), dec!(0.80));
        assert_eq!(financial_risk_for(49).as_decimal(), dec!(0.80));
        assert_eq!(financial_risk_for(50).as_decimal(), dec!(0.60));
        assert_eq!(financial_risk_for(59).as_decimal(), dec!(0.60));
        assert_eq!(financial_risk_for(60).as_decimal(), dec!(0.40));
        assert_eq!(financial_risk_for(69).as_decimal(), dec!(0.40));
        assert_eq!(financial_risk_for(70).as_decimal(), dec!(0.25));
        assert_eq!(financial_risk_for(79).as_decimal(), dec!(0.25));
        assert_eq!(financial_risk_for(80).as_decimal(), dec!(0.10));
        assert_eq!(financial_risk_for(100).as_decimal(), dec!(0.10));
    }

    #[test]
    fn test_out_of_range_health_is_total() {
        // Range checks live in the request layer
        assert_eq!(financial_risk_for(255).as_decimal(), dec!(0.10));
    }

    proptest! {
        #[test]
        fn prop_financial_risk_is_a_known_step(health in 0u8..100) {
            let allowed = [dec!(0.80), dec!(0.60), dec!(0.40), dec!(0.25), dec!(0.10)];
            prop_assert!(allowed.contains(&financial_risk_for(health).as_decimal()));
        }

        #[test]
        fn prop_financial_risk_non_increasing(health in 0u8..100) {
            prop_assert!(financial_risk_for(health + 1) <= financial_risk_for(health));
        }
    }
}
