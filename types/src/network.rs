//! Network identifier.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LumenError;

/// Identifies which Lumen network a node belongs to.
///
/// Transaction signatures commit to the network passphrase, so an envelope
/// signed for one network never validates on another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    Live,
    /// The public test network.
    Test,
    /// Local development network.
    Dev,
}

impl NetworkId {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Test => "test",
            Self::Dev => "dev",
        }
    }

    /// Passphrase hashed into every transaction signature payload.
    pub fn passphrase(&self) -> &'static str {
        match self {
            Self::Live => "Lumen Public Network ; 2024",
            Self::Test => "Lumen Test Network ; 2024",
            Self::Dev => "Lumen Development Network",
        }
    }
}

impl FromStr for NetworkId {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "test" => Ok(Self::Test),
            "dev" => Ok(Self::Dev),
            other => Err(LumenError::UnknownNetwork(other.to_string())),
        }
    }
}
