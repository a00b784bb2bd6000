//! Error types for vendor risk scoring
//!
//! Comprehensive error taxonomy using thiserror. The scorer itself has no
//! error states; these cover the lookups and request validation around it.

use crate::ids::VendorId;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Top-level vendor error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VendorError {
    #[error("Vendor with ID {vendor_id} not found")]
    NotFound { vendor_id: VendorId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// A single rejected request field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All validation failures collected for one request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Messages grouped by field name, preserving per-field order
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for err in &self.errors {
            grouped
                .entry(err.field.clone())
                .or_default()
                .push(err.message.clone());
        }
        grouped
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let vendor_id = VendorId::new();
        let err = VendorError::NotFound { vendor_id };
        assert_eq!(err.to_string(), format!("Vendor with ID {} not found", vendor_id));
    }

    #[test]
    fn test_validation_errors_grouping() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Vendor name is required");
        errors.push("slaUptime", "SLA uptime must be between 0 and 100");
        errors.push("name", "Vendor name cannot exceed 200 characters");

        let grouped = errors.by_field();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["name"].len(), 2);
        assert_eq!(grouped["name"][0], "Vendor name is required");
    }

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::new();
        errors.push("majorIncidents", "Major incidents cannot be negative");
        errors.push("documents", "Documents validation is required");
        assert_eq!(
            errors.to_string(),
            "majorIncidents: Major incidents cannot be negative; documents: Documents validation is required"
        );
    }

    #[test]
    fn test_vendor_error_from_validation() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Vendor name is required");
        let vendor_err: VendorError = errors.into();
        assert!(matches!(vendor_err, VendorError::Validation(_)));
    }
}
