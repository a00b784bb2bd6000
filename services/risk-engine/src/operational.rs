//! Operational risk calculation
//!
//! Operational risk = uptime penalty + incident penalty, capped at 1.0.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use types::numeric::Score;
use types::vendor::VendorProfile;

/// Penalty for measured SLA uptime.
///
/// | uptime   | penalty |
/// |----------|---------|
/// | < 90     | 0.50    |
/// | < 95     | 0.35    |
/// | < 99     | 0.15    |
/// | >= 99    | 0.05    |
pub fn uptime_penalty(sla_uptime: Decimal) -> Decimal {
    if sla_uptime < dec!(90) {
        dec!(0.50)
    } else if sla_uptime < dec!(95) {
        dec!(0.35)
    } else if sla_uptime < dec!(99) {
        dec!(0.15)
    } else {
        dec!(0.05)
    }
}

/// Penalty for major incidents in the trailing 12 months.
///
/// | incidents | penalty |
/// |-----------|---------|
/// | > 3       | 0.40    |
/// | 3         | 0.25    |
/// | 1 – 2     | 0.10    |
/// | 0         | 0.00    |
pub fn incident_penalty(major_incidents: u32) -> Decimal {
    match major_incidents {
        0 => Decimal::ZERO,
        1..=2 => dec!(0.10),
        3 => dec!(0.25),
        _ => dec!(0.40),
    }
}

/// Operational risk for a vendor.
pub fn operational_risk(vendor: &VendorProfile) -> Score {
    if vendor.has_poor_sla() {
        tracing::warn!(
            vendor_id = %vendor.vendor_id,
            sla_uptime = %vendor.sla_uptime,
            "poor SLA uptime"
        );
    }
    if vendor.major_incidents > 3 {
        tracing::warn!(
            vendor_id = %vendor.vendor_id,
            major_incidents = vendor.major_incidents,
            "high incident count"
        );
    }

    let score = Score::capped(
        uptime_penalty(vendor.sla_uptime) + incident_penalty(vendor.major_incidents),
    );
    tracing::debug!(
        vendor_id = %vendor.vendor_id,
        excellent_sla = vendor.has_excellent_sla(),
        risk = %score,
        "operational risk computed"
    );
    score
}
