//! Assessment event definitions
//!
//! Events derived from a finished assessment for monitoring and alerting.
//! They are observations only: producing them never alters the assessment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use types::ids::VendorId;
use types::numeric::Score;
use types::risk::{RiskAssessment, RiskLevel};
use types::vendor::{Document, VendorProfile};
use uuid::Uuid;

/// Event emitted after a vendor has been assessed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentEvent {
    pub event_id: Uuid,
    pub vendor_id: VendorId,
    pub event_type: AssessmentEventType,
    pub final_risk_score: Score,
    pub risk_level: RiskLevel,
    pub timestamp: DateTime<Utc>,
}

/// Assessment event type classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentEventType {
    /// Final score landed in [0.50, 0.75)
    HighRiskDetected,
    /// Final score landed in [0.75, 1.00]
    CriticalRiskDetected,
    /// Vendor holds no security certifications at all
    MissingCertifications,
    /// One or more compliance documents are invalid or expired
    InvalidDocuments { documents: Vec<Document> },
}

impl AssessmentEvent {
    /// Create an event from a finished assessment
    pub fn new(assessment: &RiskAssessment, event_type: AssessmentEventType) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            vendor_id: assessment.vendor_id,
            event_type,
            final_risk_score: assessment.final_risk_score,
            risk_level: assessment.risk_level,
            timestamp: assessment.assessed_at,
        }
    }
}

/// Generate events for an assessment.
///
/// Level events come first, followed by certification and document findings.
/// Low and Medium vendors with certifications and valid documents produce none.
pub fn events_for_assessment(
    vendor: &VendorProfile,
    assessment: &RiskAssessment,
) -> Vec<AssessmentEvent> {
    let mut events = Vec::new();

    match assessment.risk_level {
        RiskLevel::Low | RiskLevel::Medium => {
            // No level events needed
        }
        RiskLevel::High => {
            events.push(AssessmentEvent::new(
                assessment,
                AssessmentEventType::HighRiskDetected,
            ));
        }
        RiskLevel::Critical => {
            events.push(AssessmentEvent::new(
                assessment,
                AssessmentEventType::CriticalRiskDetected,
            ));
        }
    }

    if !vendor.has_any_certifications() {
        events.push(AssessmentEvent::new(
            assessment,
            AssessmentEventType::MissingCertifications,
        ));
    }

    let documents = vendor.documents.invalid_documents();
    if !documents.is_empty() {
        events.push(AssessmentEvent::new(
            assessment,
            AssessmentEventType::InvalidDocuments { documents },
        ));
    }

    events
}
