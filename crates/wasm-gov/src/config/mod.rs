// Module configuration and logging setup

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::WasmError;
use crate::gate::ProposalGate;
use crate::validation::ContentLimits;

/// Module configuration, read once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasmConfig {
    pub global: GlobalConfig,
    pub proposals: ProposalsConfig,
    /// Content validation limits
    pub limits: ContentLimits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for the module
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalsConfig {
    /// "true" enables all wasm proposals, "false" none; any other value
    /// enables only the kinds listed in `enable_specific`
    pub enabled: String,
    /// Comma-separated proposal kinds, e.g. "StoreCode,InstantiateContract"
    pub enable_specific: String,
}

impl Default for ProposalsConfig {
    fn default() -> Self {
        Self {
            enabled: "false".to_string(),
            enable_specific: String::new(),
        }
    }
}

impl WasmConfig {
    /// Load configuration from TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: WasmConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Build the proposal allow-list for this deployment, validating with
    /// the configured limits
    pub fn proposal_gate(&self) -> Result<ProposalGate, WasmError> {
        ProposalGate::from_config(&self.proposals, self.limits.clone())
    }

    /// Install the global tracing subscriber. `RUST_LOG` wins over the
    /// configured level. Fails if a subscriber is already installed.
    pub fn init_tracing(&self) -> anyhow::Result<()> {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    format!("{}={}", env!("CARGO_CRATE_NAME"), self.global.log_level).into()
                }),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
        Ok(())
    }
}
