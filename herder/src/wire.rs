//! Serialized transaction set, as exchanged between peers.

use serde::{Deserialize, Serialize};

use lumen_transactions::TransactionEnvelope;
use lumen_types::Hash256;

use crate::HerderError;

/// Previous ledger hash plus envelopes, in canonical order when produced by
/// a node that has hashed the set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSet {
    pub previous_ledger_hash: Hash256,
    pub txs: Vec<TransactionEnvelope>,
}

impl TransactionSet {
    pub fn to_bytes(&self) -> Result<Vec<u8>, HerderError> {
        bincode::serialize(self).map_err(|e| HerderError::Wire(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HerderError> {
        bincode::deserialize(bytes).map_err(|e| HerderError::Wire(e.to_string()))
    }
}
