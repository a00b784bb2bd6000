//! Risk scorer orchestrator
//!
//! Ties together the financial, operational and security sub-scores, the
//! weighted combination, risk level classification, explanation and event
//! emission.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use types::ids::AssessmentId;
use types::numeric::Score;
use types::risk::{RiskAssessment, RiskLevel, DEFAULT_ASSESSOR};
use types::vendor::VendorProfile;

use crate::events::{self, AssessmentEvent};
use crate::explanation;
use crate::financial;
use crate::operational;
use crate::security;

/// Decimal places kept on the final score
const FINAL_SCORE_DP: u32 = 2;

/// Weight applied to each sub-score in the final combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub financial: Decimal,
    pub operational: Decimal,
    pub security: Decimal,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            financial: dec!(0.4),
            operational: dec!(0.3),
            security: dec!(0.3),
        }
    }
}

/// Midpoint rounding applied to the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Banker's rounding: 0.845 → 0.84, 0.835 → 0.84
    #[default]
    HalfEven,
    /// Round half up in magnitude: 0.845 → 0.85
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::HalfEven => f.write_str("half-even"),
            RoundingMode::HalfAwayFromZero => f.write_str("half-away-from-zero"),
        }
    }
}

/// Unrecognized rounding mode name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rounding mode '{0}', expected 'half-even' or 'half-away-from-zero'")]
pub struct UnknownRoundingMode(pub String);

impl FromStr for RoundingMode {
    type Err = UnknownRoundingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-even" | "bankers" => Ok(RoundingMode::HalfEven),
            "half-away-from-zero" | "half-up" => Ok(RoundingMode::HalfAwayFromZero),
            _ => Err(UnknownRoundingMode(s.to_string())),
        }
    }
}

/// Risk scorer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerConfig {
    pub weights: ScoreWeights,
    pub rounding: RoundingMode,
    /// Recorded on every assessment as `assessed_by`
    pub assessed_by: String,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            rounding: RoundingMode::default(),
            assessed_by: DEFAULT_ASSESSOR.to_string(),
        }
    }
}

/// Stateless vendor risk scorer
///
/// Holds only immutable configuration, so one instance can be shared
/// across threads and invoked concurrently.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScorerConfig,
}

impl RiskScorer {
    /// Create a new scorer with default configuration
    pub fn new() -> Self {
        Self {
            config: ScorerConfig::default(),
        }
    }

    /// Create a new scorer with custom configuration
    pub fn with_config(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Weighted combination of the three sub-scores, rounded to 2 dp.
    ///
    /// `final = round(F × 0.4 + O × 0.3 + S × 0.3, 2)`
    pub fn final_score(&self, financial: Score, operational: Score, security: Score) -> Score {
        let weights = &self.config.weights;
        let weighted = financial.as_decimal() * weights.financial
            + operational.as_decimal() * weights.operational
            + security.as_decimal() * weights.security;
        let rounded = weighted.round_dp_with_strategy(FINAL_SCORE_DP, self.config.rounding.strategy());
        Score::capped(rounded)
    }

    /// Assess a vendor snapshot.
    ///
    /// Deterministic: identical vendor and timestamp produce identical scores,
    /// level and explanation. Only the assessment id differs between calls.
    pub fn assess(&self, vendor: &VendorProfile, assessed_at: DateTime<Utc>) -> RiskAssessment {
        tracing::info!(
            vendor_id = %vendor.vendor_id,
            vendor_name = %vendor.name,
            "starting risk assessment"
        );

        let financial_risk_score = financial::financial_risk(vendor);
        let operational_risk_score = operational::operational_risk(vendor);
        let security_compliance_risk_score = security::security_compliance_risk(vendor);

        let final_risk_score = self.final_score(
            financial_risk_score,
            operational_risk_score,
            security_compliance_risk_score,
        );
        let risk_level = RiskLevel::from_score(final_risk_score);

        let assessment = RiskAssessment {
            assessment_id: AssessmentId::new(),
            vendor_id: vendor.vendor_id,
            financial_risk_score,
            operational_risk_score,
            security_compliance_risk_score,
            final_risk_score,
            risk_level,
            explanation: explanation::explain(vendor),
            assessed_at,
            assessed_by: self.config.assessed_by.clone(),
        };

        tracing::info!(
            vendor_id = %vendor.vendor_id,
            financial = %assessment.financial_risk_score,
            operational = %assessment.operational_risk_score,
            security = %assessment.security_compliance_risk_score,
            final_score = %assessment.final_risk_score,
            risk_level = %assessment.risk_level,
            "risk assessment completed"
        );

        assessment
    }

    /// Assess a vendor stamped with the current time.
    pub fn assess_now(&self, vendor: &VendorProfile) -> RiskAssessment {
        self.assess(vendor, Utc::now())
    }

    /// Assess a vendor and derive monitoring events from the result.
    pub fn assess_with_events(
        &self,
        vendor: &VendorProfile,
        assessed_at: DateTime<Utc>,
    ) -> (RiskAssessment, Vec<AssessmentEvent>) {
        let assessment = self.assess(vendor, assessed_at);
        let events = events::events_for_assessment(vendor, &assessment);
        (assessment, events)
    }
}
