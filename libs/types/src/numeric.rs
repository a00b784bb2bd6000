//! Fixed-point score type
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Every risk score lives on a 0.0 – 1.0 scale; `Score` enforces that range
//! at construction so downstream code never has to re-check it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A risk score in the closed interval [0, 1]
///
/// Invariant: `0 <= value <= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(Decimal);

impl Score {
    pub const ZERO: Score = Score(Decimal::ZERO);
    pub const ONE: Score = Score(Decimal::ONE);

    /// Create a score, clamping the value into [0, 1]
    pub fn capped(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, Decimal::ONE))
    }

    /// Create a score, returning None if the value is outside [0, 1]
    pub fn try_new(value: Decimal) -> Option<Self> {
        if (Decimal::ZERO..=Decimal::ONE).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Score> for Decimal {
    fn from(score: Score) -> Self {
        score.0
    }
}
