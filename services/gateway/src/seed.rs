use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;
use std::path::Path;

use crate::models::CreateVendorRequest;
use crate::state::AppState;
use crate::validation::validate_create_vendor;

#[derive(Debug, Deserialize)]
pub struct SeedData {
    pub vendors: Vec<CreateVendorRequest>,
}

/// Load vendors from a JSON seed file into an empty store.
///
/// Returns the number of vendors inserted. A store that already holds
/// vendors is left untouched, and entries failing validation are skipped.
pub async fn seed_vendors(state: &AppState, path: &Path) -> anyhow::Result<usize> {
    if state.vendors.count().await? > 0 {
        tracing::info!("vendor store not empty, skipping seed");
        return Ok(0);
    }

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let data: SeedData = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;

    let mut inserted = 0;
    for request in data.vendors {
        let name = request.name.clone();
        match validate_create_vendor(request, Utc::now()) {
            Ok(vendor) => {
                state.vendors.insert(vendor).await?;
                inserted += 1;
            }
            Err(errors) => {
                tracing::warn!(vendor_name = %name, %errors, "skipping invalid seed vendor");
            }
        }
    }

    tracing::info!(count = inserted, path = %path.display(), "seeded vendors");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_engine::ScorerConfig;

    fn sample_path() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_vendors.json")
    }

    #[tokio::test]
    async fn test_seed_sample_file() {
        let state = AppState::in_memory(ScorerConfig::default());
        let inserted = seed_vendors(&state, &sample_path()).await.unwrap();
        assert_eq!(inserted, 5);
        assert_eq!(state.vendors.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_seed_skips_populated_store() {
        let state = AppState::in_memory(ScorerConfig::default());
        seed_vendors(&state, &sample_path()).await.unwrap();
        let inserted = seed_vendors(&state, &sample_path()).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(state.vendors.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_an_error() {
        let state = AppState::in_memory(ScorerConfig::default());
        let result = seed_vendors(&state, Path::new("does/not/exist.json")).await;
        assert!(result.is_err());
    }
}
