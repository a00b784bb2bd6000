use crate::store::{AssessmentStore, InMemoryAssessmentStore, InMemoryVendorStore, VendorStore};
use risk_engine::{RiskScorer, ScorerConfig};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub vendors: Arc<dyn VendorStore>,
    pub assessments: Arc<dyn AssessmentStore>,
    pub scorer: Arc<RiskScorer>,
}

impl AppState {
    pub fn new(
        vendors: Arc<dyn VendorStore>,
        assessments: Arc<dyn AssessmentStore>,
        scorer: RiskScorer,
    ) -> Self {
        Self {
            vendors,
            assessments,
            scorer: Arc::new(scorer),
        }
    }

    /// State backed by in-memory stores
    pub fn in_memory(config: ScorerConfig) -> Self {
        Self::new(
            Arc::new(InMemoryVendorStore::new()),
            Arc::new(InMemoryAssessmentStore::new()),
            RiskScorer::with_config(config),
        )
    }
}
