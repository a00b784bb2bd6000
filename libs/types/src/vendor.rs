//! Vendor profile and document validation types
//!
//! A `VendorProfile` is the read-only input to the risk engine. Range checks
//! on its fields belong to the request-validation layer; the engine accepts
//! any value the types can hold.

use crate::ids::VendorId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Certification identifiers the scoring rules look for
pub const CERT_ISO27001: &str = "ISO27001";
pub const CERT_SOC2: &str = "SOC2";
pub const CERT_PCI_DSS: &str = "PCI-DSS";

/// A compliance document tracked per vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Document {
    Contract,
    PrivacyPolicy,
    PentestReport,
}

impl Document {
    /// All tracked documents, in reporting order
    pub const ALL: [Document; 3] = [
        Document::Contract,
        Document::PrivacyPolicy,
        Document::PentestReport,
    ];

    /// Human-readable document name
    pub fn name(&self) -> &'static str {
        match self {
            Document::Contract => "Contract",
            Document::PrivacyPolicy => "Privacy Policy",
            Document::PentestReport => "Pentest Report",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validity flags for the vendor's compliance documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DocumentValidation {
    pub contract_valid: bool,
    pub privacy_policy_valid: bool,
    pub pentest_report_valid: bool,
}

impl DocumentValidation {
    pub fn new(contract_valid: bool, privacy_policy_valid: bool, pentest_report_valid: bool) -> Self {
        Self {
            contract_valid,
            privacy_policy_valid,
            pentest_report_valid,
        }
    }

    /// Whether a single document is valid
    pub fn is_valid(&self, document: Document) -> bool {
        match document {
            Document::Contract => self.contract_valid,
            Document::PrivacyPolicy => self.privacy_policy_valid,
            Document::PentestReport => self.pentest_report_valid,
        }
    }

    pub fn all_valid(&self) -> bool {
        self.invalid_count() == 0
    }

    /// Number of invalid or expired documents (0–3)
    pub fn invalid_count(&self) -> usize {
        self.invalid_documents().len()
    }

    /// Invalid documents in reporting order: Contract, Privacy Policy, Pentest Report
    pub fn invalid_documents(&self) -> Vec<Document> {
        Document::ALL
            .into_iter()
            .filter(|doc| !self.is_valid(*doc))
            .collect()
    }
}

/// Vendor profile per the business inputs the scorer consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub vendor_id: VendorId,
    pub name: String,
    /// Solvency score, 0–100, higher is better
    pub financial_health: u8,
    /// Measured SLA availability percentage, 0–100
    pub sla_uptime: Decimal,
    /// Major incidents in the trailing 12 months
    pub major_incidents: u32,
    pub security_certs: BTreeSet<String>,
    pub documents: DocumentValidation,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl VendorProfile {
    /// Create a new vendor profile with a fresh identifier
    pub fn new(
        name: impl Into<String>,
        financial_health: u8,
        sla_uptime: Decimal,
        major_incidents: u32,
        security_certs: impl IntoIterator<Item = impl Into<String>>,
        documents: DocumentValidation,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            vendor_id: VendorId::new(),
            name: name.into(),
            financial_health,
            sla_uptime,
            major_incidents,
            security_certs: security_certs.into_iter().map(Into::into).collect(),
            documents,
            created_at,
            updated_at: None,
        }
    }

    pub fn has_certification(&self, cert: &str) -> bool {
        self.security_certs.contains(cert)
    }

    pub fn has_iso27001(&self) -> bool {
        self.has_certification(CERT_ISO27001)
    }

    pub fn has_soc2(&self) -> bool {
        self.has_certification(CERT_SOC2)
    }

    pub fn has_pci_dss(&self) -> bool {
        self.has_certification(CERT_PCI_DSS)
    }

    pub fn has_any_certifications(&self) -> bool {
        !self.security_certs.is_empty()
    }

    pub fn is_high_risk_financially(&self) -> bool {
        self.financial_health < 50
    }

    pub fn is_low_risk_financially(&self) -> bool {
        self.financial_health > 80
    }

    pub fn has_poor_sla(&self) -> bool {
        self.sla_uptime < Decimal::from(95)
    }

    pub fn has_excellent_sla(&self) -> bool {
        self.sla_uptime >= Decimal::from(99)
    }

    pub fn has_multiple_incidents(&self) -> bool {
        self.major_incidents > 2
    }
}
