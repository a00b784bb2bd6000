//! Vendor and assessment stores
//!
//! The gateway talks to persistence only through these traits. The
//! in-memory implementations keep an insertion sequence so listings are
//! stable newest-first regardless of id ordering.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use types::ids::VendorId;
use types::risk::RiskAssessment;
use types::vendor::VendorProfile;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// One page of a listing, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Page {
    /// Page number floored at 1, size clamped to [1, MAX_PAGE_SIZE]
    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number: number.max(1),
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> usize {
        (self.number as usize - 1).saturating_mul(self.size as usize)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

#[async_trait]
pub trait VendorStore: Send + Sync {
    async fn insert(&self, vendor: VendorProfile) -> Result<VendorProfile, StoreError>;

    async fn get(&self, vendor_id: VendorId) -> Result<Option<VendorProfile>, StoreError>;

    /// Vendors newest first
    async fn list(&self, page: Page) -> Result<Vec<VendorProfile>, StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;

    async fn remove(&self, vendor_id: VendorId) -> Result<Option<VendorProfile>, StoreError>;
}

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    async fn append(&self, assessment: RiskAssessment) -> Result<(), StoreError>;

    /// Assessments for one vendor, newest first
    async fn list_for_vendor(&self, vendor_id: VendorId) -> Result<Vec<RiskAssessment>, StoreError>;

    /// Drop every assessment for a vendor, returning how many were removed
    async fn remove_for_vendor(&self, vendor_id: VendorId) -> Result<usize, StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryVendorStore {
    vendors: DashMap<VendorId, (u64, VendorProfile)>,
    next_seq: AtomicU64,
}

impl InMemoryVendorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VendorStore for InMemoryVendorStore {
    async fn insert(&self, vendor: VendorProfile) -> Result<VendorProfile, StoreError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.vendors.insert(vendor.vendor_id, (seq, vendor.clone()));
        Ok(vendor)
    }

    async fn get(&self, vendor_id: VendorId) -> Result<Option<VendorProfile>, StoreError> {
        Ok(self.vendors.get(&vendor_id).map(|entry| entry.1.clone()))
    }

    async fn list(&self, page: Page) -> Result<Vec<VendorProfile>, StoreError> {
        let mut all: Vec<(u64, VendorProfile)> = self
            .vendors
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(all
            .into_iter()
            .skip(page.offset())
            .take(page.size as usize)
            .map(|(_, vendor)| vendor)
            .collect())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.vendors.len())
    }

    async fn remove(&self, vendor_id: VendorId) -> Result<Option<VendorProfile>, StoreError> {
        Ok(self.vendors.remove(&vendor_id).map(|(_, (_, vendor))| vendor))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAssessmentStore {
    by_vendor: DashMap<VendorId, Vec<RiskAssessment>>,
}

impl InMemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn append(&self, assessment: RiskAssessment) -> Result<(), StoreError> {
        self.by_vendor
            .entry(assessment.vendor_id)
            .or_default()
            .push(assessment);
        Ok(())
    }

    async fn list_for_vendor(&self, vendor_id: VendorId) -> Result<Vec<RiskAssessment>, StoreError> {
        Ok(self
            .by_vendor
            .get(&vendor_id)
            .map(|entry| entry.iter().rev().cloned().collect())
            .unwrap_or_default())
    }

    async fn remove_for_vendor(&self, vendor_id: VendorId) -> Result<usize, StoreError> {
        Ok(self
            .by_vendor
            .remove(&vendor_id)
            .map_or(0, |(_, assessments)| assessments.len()))
    }
}
