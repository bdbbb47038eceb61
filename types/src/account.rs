//! Account identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LumenError;
use crate::keys::PublicKey;

/// Per-account transaction sequence number.
pub type SequenceNumber = i64;

/// A Lumen account identifier: the account's Ed25519 public key.
///
/// Ordered bytewise; surge pricing uses this order as its deterministic
/// tie-break between accounts.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(#[serde(with = "crate::serde_hex")] [u8; 32]);

impl AccountId {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The public key that must sign transactions sourced from this account.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, LumenError> {
        crate::serde_hex::decode(s).map(Self)
    }
}

impl From<&PublicKey> for AccountId {
    fn from(key: &PublicKey) -> Self {
        Self(key.0)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for AccountId {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
