//! Security and compliance risk calculation
//!
//! Security risk = certification penalty + document penalty, capped at 1.0.
//! The document penalty is a count-based step plus fixed add-ons for the
//! privacy policy and the pentest report; the add-ons stack on the count.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use types::numeric::Score;
use types::vendor::{DocumentValidation, VendorProfile};

const NO_CERTIFICATIONS_PENALTY: Decimal = dec!(0.40);
const MISSING_ISO27001_PENALTY: Decimal = dec!(0.20);
const MISSING_SOC2_AND_PCI_PENALTY: Decimal = dec!(0.10);
const PRIVACY_POLICY_ADDON: Decimal = dec!(0.10);
const PENTEST_REPORT_ADDON: Decimal = dec!(0.15);

/// Penalty for the vendor's certification set.
///
/// A vendor with no certifications at all takes a flat 0.40. Otherwise
/// missing ISO27001 adds 0.20 and missing both SOC2 and PCI-DSS adds 0.10.
pub fn certification_penalty(vendor: &VendorProfile) -> Decimal {
    if !vendor.has_any_certifications() {
        return NO_CERTIFICATIONS_PENALTY;
    }

    let mut penalty = Decimal::ZERO;
    if !vendor.has_iso27001() {
        penalty += MISSING_ISO27001_PENALTY;
    }
    if !vendor.has_soc2() && !vendor.has_pci_dss() {
        penalty += MISSING_SOC2_AND_PCI_PENALTY;
    }
    penalty
}

/// Count-based penalty for invalid documents (out of three).
pub fn document_count_penalty(invalid_count: usize) -> Decimal {
    match invalid_count {
        0 => Decimal::ZERO,
        1 => dec!(0.15),
        2 => dec!(0.30),
        _ => dec!(0.50),
    }
}

/// Fixed add-ons applied regardless of the invalid count.
pub fn document_addons(documents: &DocumentValidation) -> Decimal {
    let mut addon = Decimal::ZERO;
    if !documents.privacy_policy_valid {
        addon += PRIVACY_POLICY_ADDON;
    }
    if !documents.pentest_report_valid {
        addon += PENTEST_REPORT_ADDON;
    }
    addon
}

/// Total document penalty: count-based step plus add-ons.
pub fn document_penalty(documents: &DocumentValidation) -> Decimal {
    document_count_penalty(documents.invalid_count()) + document_addons(documents)
}

/// Security and compliance risk for a vendor.
pub fn security_compliance_risk(vendor: &VendorProfile) -> Score {
    if !vendor.has_any_certifications() {
        tracing::warn!(vendor_id = %vendor.vendor_id, "vendor has no security certifications");
    } else if !vendor.has_iso27001() {
        tracing::info!(vendor_id = %vendor.vendor_id, "vendor missing ISO27001 certification");
    }

    let invalid = vendor.documents.invalid_documents();
    if !invalid.is_empty() {
        let names: Vec<&str> = invalid.iter().map(|doc| doc.name()).collect();
        tracing::warn!(
            vendor_id = %vendor.vendor_id,
            invalid_count = invalid.len(),
            invalid_documents = %names.join(", "),
            "vendor has invalid documents"
        );
    }

    let raw = certification_penalty(vendor) + document_penalty(&vendor.documents);
    Score::capped(raw)
}
