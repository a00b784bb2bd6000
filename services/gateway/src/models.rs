use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::{AssessmentId, VendorId};
use types::risk::{RiskAssessment, RiskLevel};
use types::vendor::{DocumentValidation, VendorProfile};

use crate::store::{DEFAULT_PAGE_SIZE, Page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsDto {
    pub contract_valid: bool,
    pub privacy_policy_valid: bool,
    pub pentest_report_valid: bool,
}

impl From<DocumentsDto> for DocumentValidation {
    fn from(dto: DocumentsDto) -> Self {
        DocumentValidation::new(
            dto.contract_valid,
            dto.privacy_policy_valid,
            dto.pentest_report_valid,
        )
    }
}

impl From<DocumentValidation> for DocumentsDto {
    fn from(docs: DocumentValidation) -> Self {
        Self {
            contract_valid: docs.contract_valid,
            privacy_policy_valid: docs.privacy_policy_valid,
            pentest_report_valid: docs.pentest_report_valid,
        }
    }
}

/// Incoming vendor payload. Numeric fields are optional, wide and signed so
/// that missing or out-of-range values reach validation instead of failing
/// to parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub financial_health: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub sla_uptime: Option<Decimal>,
    #[serde(default)]
    pub major_incidents: i64,
    #[serde(default)]
    pub security_certs: Vec<String>,
    pub documents: Option<DocumentsDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorResponse {
    pub id: VendorId,
    pub name: String,
    pub financial_health: u8,
    #[serde(with = "rust_decimal::serde::float")]
    pub sla_uptime: Decimal,
    pub major_incidents: u32,
    pub security_certs: Vec<String>,
    pub documents: DocumentsDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<VendorProfile> for VendorResponse {
    fn from(vendor: VendorProfile) -> Self {
        Self {
            id: vendor.vendor_id,
            name: vendor.name,
            financial_health: vendor.financial_health,
            sla_uptime: vendor.sla_uptime,
            major_incidents: vendor.major_incidents,
            security_certs: vendor.security_certs.into_iter().collect(),
            documents: vendor.documents.into(),
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentResponse {
    pub id: AssessmentId,
    pub vendor_id: VendorId,
    #[serde(with = "rust_decimal::serde::float")]
    pub financial_risk_score: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub operational_risk_score: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub security_compliance_risk_score: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_risk_score: Decimal,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub assessed_at: DateTime<Utc>,
    pub assessed_by: String,
}

impl From<RiskAssessment> for RiskAssessmentResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            id: assessment.assessment_id,
            vendor_id: assessment.vendor_id,
            financial_risk_score: assessment.financial_risk_score.into(),
            operational_risk_score: assessment.operational_risk_score.into(),
            security_compliance_risk_score: assessment.security_compliance_risk_score.into(),
            final_risk_score: assessment.final_risk_score.into(),
            risk_level: assessment.risk_level,
            explanation: assessment.explanation,
            assessed_at: assessment.assessed_at,
            assessed_by: assessment.assessed_by,
        }
    }
}

/// `?page=&pageSize=` query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVendorsQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListVendorsQuery {
    pub fn page(&self) -> Page {
        let number = self.page.unwrap_or(1);
        let size = self.page_size.unwrap_or(i64::from(DEFAULT_PAGE_SIZE));
        Page::new(saturating_u32(number), saturating_u32(size))
    }
}

fn saturating_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_engine::RiskScorer;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_numbers() {
        let req: CreateVendorRequest = serde_json::from_value(json!({
            "name": "Acme",
            "financialHealth": 80,
            "slaUptime": 99.9,
            "majorIncidents": 1,
            "securityCerts": ["ISO27001"],
            "documents": {
                "contractValid": true,
                "privacyPolicyValid": true,
                "pentestReportValid": false
            }
        }))
        .unwrap();

        assert_eq!(req.sla_uptime, Some(Decimal::from_str_exact("99.9").unwrap()));
        assert_eq!(req.financial_health, Some(80));
        assert!(!req.documents.unwrap().pentest_report_valid);
    }

    #[test]
    fn test_create_request_integer_uptime() {
        let req: CreateVendorRequest = serde_json::from_value(json!({
            "name": "Acme",
            "financialHealth": 80,
            "slaUptime": 95
        }))
        .unwrap();
        assert_eq!(req.sla_uptime, Some(Decimal::from(95)));
        assert!(req.documents.is_none());
        assert!(req.security_certs.is_empty());
    }

    #[test]
    fn test_create_request_missing_numbers() {
        let req: CreateVendorRequest = serde_json::from_value(json!({ "name": "Acme" })).unwrap();
        assert!(req.financial_health.is_none());
        assert!(req.sla_uptime.is_none());
        assert_eq!(req.major_incidents, 0);
    }

    #[test]
    fn test_assessment_response_uses_numbers() {
        let vendor = VendorProfile::new(
            "Acme",
            45,
            Decimal::from(88),
            3,
            Vec::<String>::new(),
            DocumentValidation::new(false, false, false),
            Utc::now(),
        );
        let assessment = RiskScorer::new().assess_now(&vendor);
        let body = serde_json::to_value(RiskAssessmentResponse::from(assessment)).unwrap();

        assert_eq!(body["financialRiskScore"], json!(0.8));
        assert_eq!(body["operationalRiskScore"], json!(0.75));
        assert_eq!(body["securityComplianceRiskScore"], json!(1.0));
        assert_eq!(body["finalRiskScore"], json!(0.84));
        assert_eq!(body["riskLevel"], json!("Critical"));
        assert_eq!(body["assessedBy"], json!("System"));
    }

    #[test]
    fn test_list_query_defaults_and_clamps() {
        assert_eq!(ListVendorsQuery::default().page(), Page::new(1, 10));

        let query = ListVendorsQuery {
            page: Some(-4),
            page_size: Some(1_000),
        };
        assert_eq!(query.page(), Page::new(1, 100));
    }
}
