//! Human-readable assessment explanations
//!
//! Reasons are evaluated in a fixed order, each behind its own condition,
//! and joined with `" + "`. A vendor that triggers none of them gets the
//! fixed positive message.

use rust_decimal::prelude::*;
use types::vendor::VendorProfile;

/// Explanation used when no risk indicator triggers
pub const NO_RISK_INDICATORS: &str =
    "Vendor meets all compliance and operational standards with minimal risk indicators.";

/// Separator between individual reasons
pub const REASON_SEPARATOR: &str = " + ";

/// Collect the ordered list of risk reasons for a vendor.
///
/// Order:
/// 1. Financial health (critical below 50, moderate below 70)
/// 2. SLA uptime below 95%
/// 3. Major incidents (multiple above 2, otherwise any)
/// 4. Missing ISO27001
/// 5. Invalid or expired documents
pub fn reasons(vendor: &VendorProfile) -> Vec<String> {
    let mut reasons = Vec::new();

    if vendor.financial_health < 50 {
        reasons.push(format!(
            "Critical financial health ({}/100)",
            vendor.financial_health
        ));
    } else if vendor.financial_health < 70 {
        reasons.push(format!(
            "Moderate financial health ({}/100)",
            vendor.financial_health
        ));
    }

    if vendor.has_poor_sla() {
        reasons.push(format!(
            "SLA uptime below 95% ({}%)",
            two_decimals(vendor.sla_uptime)
        ));
    }

    if vendor.has_multiple_incidents() {
        reasons.push(format!(
            "Multiple major incidents ({} in last 12 months)",
            vendor.major_incidents
        ));
    } else if vendor.major_incidents > 0 {
        reasons.push(format!(
            "{} major incident(s) in last 12 months",
            vendor.major_incidents
        ));
    }

    if !vendor.has_iso27001() {
        reasons.push("Missing ISO27001 certification".to_string());
    }

    let invalid = vendor.documents.invalid_documents();
    if !invalid.is_empty() {
        let names: Vec<&str> = invalid.iter().map(|doc| doc.name()).collect();
        reasons.push(format!("Invalid/expired documents: {}", names.join(", ")));
    }

    reasons
}

/// Build the explanation string for a vendor.
pub fn explain(vendor: &VendorProfile) -> String {
    let reasons = reasons(vendor);
    if reasons.is_empty() {
        NO_RISK_INDICATORS.to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    }
}

/// Fixed two-decimal rendering, rounding half away from zero.
fn two_decimals(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
