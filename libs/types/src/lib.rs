//! Types library for vendor risk scoring
//!
//! This library provides the core type definitions shared by the risk engine
//! and the gateway, so that every crate agrees on the shape of a vendor
//! record and of the assessment derived from it.
//!
//! # Modules
//! - `ids`: Unique identifiers (VendorId, AssessmentId)
//! - `numeric`: Fixed-point score type clamped to [0, 1]
//! - `vendor`: Vendor profile and document validation
//! - `risk`: Risk levels and assessments
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod vendor;
pub mod risk;
pub mod errors;

