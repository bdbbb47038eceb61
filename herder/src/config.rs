//! Herder configuration with TOML file support.

use serde::{Deserialize, Serialize};

use lumen_crypto::network_id_hash;
use lumen_types::{AccountId, Hash256, NetworkId};
use lumen_utils::LogFormat;

use crate::whitelist::Whitelist;
use crate::HerderError;

/// Configuration for the transaction-set engine and the tools around it.
///
/// Can be loaded from a TOML file via [`HerderConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HerderConfig {
    /// Network whose id signs and identifies transactions.
    #[serde(default = "default_network")]
    pub network: NetworkId,

    /// Privileged accounts and the capacity reserved for everyone else.
    #[serde(default)]
    pub whitelist: WhitelistConfig,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Default log level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistConfig {
    /// The distinguished account; its transactions sort first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<AccountId>,

    #[serde(default)]
    pub accounts: Vec<AccountId>,

    /// Share of each set, in percent, reserved for non-privileged
    /// transactions while the whitelist is enabled.
    #[serde(default = "default_reserve_percent")]
    pub reserve_percent: u32,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_network() -> NetworkId {
    NetworkId::Dev
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_reserve_percent() -> u32 {
    5
}

// ── Impl ───────────────────────────────────────────────────────────────

impl HerderConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, HerderError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| HerderError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, HerderError> {
        toml::from_str(s).map_err(|e| HerderError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("HerderConfig is always serializable to TOML")
    }

    pub fn network_id(&self) -> Hash256 {
        network_id_hash(self.network)
    }

    pub fn whitelist(&self) -> Whitelist {
        Whitelist::from_config(&self.whitelist)
    }
}

impl Default for HerderConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            whitelist: WhitelistConfig::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self {
            holder: None,
            accounts: Vec::new(),
            reserve_percent: default_reserve_percent(),
        }
    }
}
