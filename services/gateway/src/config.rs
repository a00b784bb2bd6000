use anyhow::Context;
use risk_engine::{RoundingMode, ScorerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use types::risk::DEFAULT_ASSESSOR;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Gateway configuration, read from the environment at startup
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub addr: SocketAddr,
    /// JSON file of vendors loaded into an empty store
    pub seed_file: Option<PathBuf>,
    pub scorer: ScorerConfig,
}

impl GatewayConfig {
    /// Reads `GATEWAY_ADDR`, `GATEWAY_SEED_FILE`, `GATEWAY_ROUNDING` and `GATEWAY_ASSESSOR`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr_raw = lookup("GATEWAY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .parse()
            .with_context(|| format!("invalid GATEWAY_ADDR '{addr_raw}'"))?;

        let seed_file = lookup("GATEWAY_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let rounding = match lookup("GATEWAY_ROUNDING") {
            Some(raw) => raw.parse::<RoundingMode>()?,
            None => RoundingMode::default(),
        };

        let assessed_by = lookup("GATEWAY_ASSESSOR")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ASSESSOR.to_string());

        Ok(Self {
            addr,
            seed_file,
            scorer: ScorerConfig {
                rounding,
                assessed_by,
                ..ScorerConfig::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.seed_file.is_none());
        assert_eq!(config.scorer, ScorerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("GATEWAY_ADDR", "127.0.0.1:9000"),
            ("GATEWAY_SEED_FILE", "data/sample_vendors.json"),
            ("GATEWAY_ROUNDING", "half-away-from-zero"),
            ("GATEWAY_ASSESSOR", "risk-team"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.seed_file, Some(PathBuf::from("data/sample_vendors.json")));
        assert_eq!(config.scorer.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(config.scorer.assessed_by, "risk-team");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(GatewayConfig::from_lookup(lookup_from(&[("GATEWAY_ADDR", "nowhere")])).is_err());
        assert!(GatewayConfig::from_lookup(lookup_from(&[("GATEWAY_ROUNDING", "ceiling")])).is_err());
    }
}
