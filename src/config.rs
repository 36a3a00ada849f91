//! Simulator configuration
//!
//! Values come from an optional JSON file and are then overridden by
//! command line arguments.

use crate::api::scryfall::{SCRYFALL_API_URL, USER_AGENT};
use crate::deck::{LookupStrategy, DEFAULT_HAND_SIZE};
use crate::error::{DeckError, DeckResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub hand_size: usize,
    pub scryfall_base_url: String,
    pub user_agent: String,
    pub lookup_strategy: LookupStrategy,
    /// Fixed RNG seed for reproducible shuffles
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            scryfall_base_url: SCRYFALL_API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            lookup_strategy: LookupStrategy::default(),
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a JSON file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> DeckResult<Self> {
        let path = path.as_ref();
        log::info!("Loading configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            DeckError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.hand_size == 0 {
            return Err(DeckError::Config("hand_size must be at least 1".to_string()));
        }
        if self.scryfall_base_url.trim().is_empty() {
            return Err(DeckError::Config(
                "scryfall_base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
