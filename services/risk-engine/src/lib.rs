//! Risk Engine Service
//!
//! Deterministic, rule-based vendor risk scoring:
//! - financial risk from financial health
//! - operational risk from SLA uptime and major incidents
//! - security/compliance risk from certifications and document validity
//!
//! The three sub-scores are combined by weight into a final score, which
//! is classified into a risk level and explained in plain language.
//! Every computation is a pure function of the vendor snapshot.

pub mod financial;
pub mod operational;
pub mod security;
pub mod explanation;
pub mod events;
pub mod engine;

pub use engine::{RiskScorer, RoundingMode, ScoreWeights, ScorerConfig};
