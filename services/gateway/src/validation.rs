//! Request validation
//!
//! Range checks run here, before anything reaches the scorer. Every failing
//! field is collected so the client sees all problems in one response.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use types::errors::ValidationErrors;
use types::vendor::VendorProfile;

use crate::models::CreateVendorRequest;

pub const MAX_NAME_LENGTH: usize = 200;

/// Validate a create-vendor request and build the vendor profile.
///
/// Checks performed (in order):
/// 1. Name present and at most 200 characters
/// 2. Financial health present and within [0, 100]
/// 3. SLA uptime present and within [0, 100]
/// 4. Major incidents non-negative
/// 5. Documents block present
///
/// Certification names are stored exactly as sent.
pub fn validate_create_vendor(
    request: CreateVendorRequest,
    created_at: DateTime<Utc>,
) -> Result<VendorProfile, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = request.name.trim();
    if name.is_empty() {
        errors.push("name", "Vendor name is required");
    } else if name.chars().count() > MAX_NAME_LENGTH {
        errors.push("name", "Vendor name cannot exceed 200 characters");
    }

    let financial_health = match request.financial_health {
        None => {
            errors.push("financialHealth", "Financial health is required");
            None
        }
        Some(raw) => {
            let health = u8::try_from(raw).ok().filter(|health| *health <= 100);
            if health.is_none() {
                errors.push("financialHealth", "Financial health must be between 0 and 100");
            }
            health
        }
    };

    let sla_uptime = match request.sla_uptime {
        None => {
            errors.push("slaUptime", "SLA uptime is required");
            None
        }
        Some(uptime) if uptime < Decimal::ZERO || uptime > Decimal::ONE_HUNDRED => {
            errors.push("slaUptime", "SLA uptime must be between 0 and 100");
            None
        }
        Some(uptime) => Some(uptime),
    };

    let major_incidents = u32::try_from(request.major_incidents).ok();
    if major_incidents.is_none() {
        errors.push("majorIncidents", "Major incidents cannot be negative");
    }

    if request.documents.is_none() {
        errors.push("documents", "Documents validation is required");
    }

    match (financial_health, sla_uptime, major_incidents, request.documents) {
        (Some(financial_health), Some(sla_uptime), Some(major_incidents), Some(documents))
            if errors.is_empty() =>
        {
            Ok(VendorProfile::new(
                name,
                financial_health,
                sla_uptime,
                major_incidents,
                request.security_certs,
                documents.into(),
                created_at,
            ))
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentsDto;
    use risk_engine::security::certification_penalty;

    fn make_request() -> CreateVendorRequest {
        CreateVendorRequest {
            name: "Acme Hosting".to_string(),
            financial_health: Some(80),
            sla_uptime: Some(Decimal::from_str_exact("99.5").unwrap()),
            major_incidents: 0,
            security_certs: vec!["ISO27001".to_string(), "SOC2".to_string()],
            documents: Some(DocumentsDto {
                contract_valid: true,
                privacy_policy_valid: true,
                pentest_report_valid: true,
            }),
        }
    }

    #[test]
    fn test_valid_request_builds_profile() {
        let vendor = validate_create_vendor(make_request(), Utc::now()).unwrap();
        assert_eq!(vendor.name, "Acme Hosting");
        assert_eq!(vendor.financial_health, 80);
        assert!(vendor.has_iso27001());
        assert!(vendor.has_soc2());
        assert_eq!(vendor.security_certs.len(), 2);
        assert!(vendor.documents.all_valid());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let mut request = make_request();
        request.financial_health = Some(100);
        request.sla_uptime = Some(Decimal::ONE_HUNDRED);
        assert!(validate_create_vendor(request, Utc::now()).is_ok());

        let mut request = make_request();
        request.financial_health = Some(0);
        request.sla_uptime = Some(Decimal::ZERO);
        assert!(validate_create_vendor(request, Utc::now()).is_ok());
    }

    #[test]
    fn test_all_failures_are_collected() {
        let request = CreateVendorRequest {
            name: "   ".to_string(),
            financial_health: Some(101),
            sla_uptime: Some(Decimal::from_str_exact("100.01").unwrap()),
            major_incidents: -1,
            security_certs: Vec::new(),
            documents: None,
        };

        let errors = validate_create_vendor(request, Utc::now()).unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["name", "financialHealth", "slaUptime", "majorIncidents", "documents"]
        );
    }

    #[test]
    fn test_name_too_long() {
        let mut request = make_request();
        request.name = "x".repeat(201);
        let errors = validate_create_vendor(request, Utc::now()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.errors()[0].message,
            "Vendor name cannot exceed 200 characters"
        );

        let mut request = make_request();
        request.name = "x".repeat(200);
        assert!(validate_create_vendor(request, Utc::now()).is_ok());
    }

    #[test]
    fn test_negative_financial_health() {
        let mut request = make_request();
        request.financial_health = Some(-5);
        let errors = validate_create_vendor(request, Utc::now()).unwrap_err();
        assert_eq!(errors.errors()[0].field, "financialHealth");
    }

    #[test]
    fn test_missing_numbers_are_required() {
        let mut request = make_request();
        request.financial_health = None;
        request.sla_uptime = None;
        let errors = validate_create_vendor(request, Utc::now()).unwrap_err();

        let grouped = errors.by_field();
        assert_eq!(grouped["financialHealth"], vec!["Financial health is required"]);
        assert_eq!(grouped["slaUptime"], vec!["SLA uptime is required"]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_certifications_are_stored_as_sent() {
        let mut request = make_request();
        request.security_certs = vec![String::new()];
        let vendor = validate_create_vendor(request, Utc::now()).unwrap();
        assert!(vendor.has_any_certifications());
        assert!(!vendor.has_iso27001());
        // a blank entry still counts as holding a certification
        assert_eq!(certification_penalty(&vendor), Decimal::new(30, 2));

        let mut request = make_request();
        request.security_certs = vec![" SOC2 ".to_string()];
        let vendor = validate_create_vendor(request, Utc::now()).unwrap();
        assert!(!vendor.has_soc2());
        assert!(vendor.has_certification(" SOC2 "));
        assert_eq!(certification_penalty(&vendor), Decimal::new(30, 2));
    }
}
