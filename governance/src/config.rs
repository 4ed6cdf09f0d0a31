//! Plugin configuration with TOML file support.

use std::path::Path;

use serde::{Deserialize, Serialize};
use warden_types::Address;
use warden_utils::LogFormat;

use crate::settings::{MultisigSettings, DEFAULT_PROPOSAL_DURATION_SECS};
use crate::GovernanceError;

/// Configuration for installing a member access plugin.
///
/// Can be loaded from a TOML file via [`PluginConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Voting window in seconds.
    #[serde(default = "default_proposal_duration_secs")]
    pub proposal_duration_secs: u64,

    /// Editor roster address, `0x`-prefixed hex.
    pub roster: Address,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_proposal_duration_secs() -> u64 {
    DEFAULT_PROPOSAL_DURATION_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl PluginConfig {
    pub fn new(roster: Address) -> Self {
        Self {
            proposal_duration_secs: default_proposal_duration_secs(),
            roster,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GovernanceError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| GovernanceError::Config(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, GovernanceError> {
        toml::from_str(s).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, GovernanceError> {
        toml::to_string_pretty(self).map_err(|e| GovernanceError::Config(e.to_string()))
    }

    pub fn multisig_settings(&self) -> MultisigSettings {
        MultisigSettings::new(self.proposal_duration_secs, self.roster)
    }
}
