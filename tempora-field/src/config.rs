//! Field configuration

use serde::{Deserialize, Serialize};
use std::env;
use tempora_core::{Result, TemporalError};

/// Environment variable overriding [`FieldConfig::max_probes`]
pub const MAX_PROBES_VAR: &str = "TEMPORA_MAX_PROBES";

const DEFAULT_MAX_PROBES: u32 = 16;

/// Tunables shared by the fields a registry builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Chronology probes an imprecise field may spend refining an estimate
    /// before deferring to the chronology's own difference
    pub max_probes: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self { max_probes: DEFAULT_MAX_PROBES }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_probes(mut self, max_probes: u32) -> Self {
        self.max_probes = max_probes;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_probes == 0 {
            return Err(TemporalError::illegal_argument("max_probes must be at least 1"));
        }
        Ok(())
    }

    /// Parse a JSON document such as `{"max_probes": 8}`
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TemporalError::illegal_argument(format!("Invalid field config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `TEMPORA_MAX_PROBES` when set
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAX_PROBES_VAR) {
            config.max_probes = raw.trim().parse().map_err(|_| {
                TemporalError::illegal_argument(format!("{} is not a valid probe count: {}", MAX_PROBES_VAR, raw))
            })?;
        }
        config.validate()?;
        Ok(config)
    }
}
