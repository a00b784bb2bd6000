//! Risk level and assessment types
//!
//! An assessment is a derived snapshot: it is computed once per request and
//! never updated in place. Each one refers back to its vendor by id.

use crate::ids::{AssessmentId, VendorId};
use crate::numeric::Score;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessor recorded when none is configured
pub const DEFAULT_ASSESSOR: &str = "System";

/// Ordinal risk classification derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// [0.00, 0.25)
    Low,
    /// [0.25, 0.50)
    Medium,
    /// [0.50, 0.75)
    High,
    /// [0.75, 1.00]
    Critical,
}

impl RiskLevel {
    /// Classify a final score using half-open thresholds.
    ///
    /// | score          | level    |
    /// |----------------|----------|
    /// | [0.00, 0.25)   | Low      |
    /// | [0.25, 0.50)   | Medium   |
    /// | [0.50, 0.75)   | High     |
    /// | [0.75, 1.00]   | Critical |
    pub fn from_score(score: Score) -> Self {
        let value = score.as_decimal();
        if value < Decimal::new(25, 2) {
            RiskLevel::Low
        } else if value < Decimal::new(50, 2) {
            RiskLevel::Medium
        } else if value < Decimal::new(75, 2) {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computed risk assessment for one vendor snapshot
///
/// Invariant: `risk_level == RiskLevel::from_score(final_risk_score)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub assessment_id: AssessmentId,
    pub vendor_id: VendorId,
    pub financial_risk_score: Score,
    pub operational_risk_score: Score,
    pub security_compliance_risk_score: Score,
    /// Weighted combination, rounded to 2 decimal places
    pub final_risk_score: Score,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub assessed_at: DateTime<Utc>,
    pub assessed_by: String,
}

impl RiskAssessment {
    /// Whether the stored level agrees with the stored final score
    pub fn is_consistent(&self) -> bool {
        self.risk_level == RiskLevel::from_score(self.final_risk_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(s: &str) -> Score {
        Score::try_new(Decimal::from_str_exact(s).unwrap()).unwrap()
    }

    #[test]
    fn test_level_lower_bounds_are_inclusive() {
        assert_eq!(RiskLevel::from_score(score("0")), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(score("0.25")), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(score("0.50")), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(score("0.75")), RiskLevel::Critical);
    }

    #[test]
    fn test_level_upper_bounds_are_exclusive() {
        assert_eq!(RiskLevel::from_score(score("0.2499")), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(score("0.4999")), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(score("0.7499")), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(score("0.9999")), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(Score::ONE), RiskLevel::Critical);
    }

    #[test]
    fn test_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn test_level_serialization() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"Critical\"");
        assert_eq!(RiskLevel::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_assessment_consistency() {
        let assessment = RiskAssessment {
            assessment_id: AssessmentId::new(),
            vendor_id: VendorId::new(),
            financial_risk_score: score("0.10"),
            operational_risk_score: score("0.05"),
            security_compliance_risk_score: score("0.10"),
            final_risk_score: score("0.08"),
            risk_level: RiskLevel::Low,
            explanation: String::new(),
            assessed_at: Utc::now(),
            assessed_by: DEFAULT_ASSESSOR.to_string(),
        };
        assert!(assessment.is_consistent());

        let tampered = RiskAssessment {
            risk_level: RiskLevel::High,
            ..assessment
        };
        assert!(!tampered.is_consistent());
    }
}
