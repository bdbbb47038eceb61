//! Signed transaction envelopes.
//!
//! The wire form of an envelope is its bincode encoding. The full hash of a
//! transaction is taken over those bytes, signatures included, so two
//! envelopes with the same body but different signature sets are distinct
//! transactions.

use lumen_crypto::{sha256_multi, sign_message};
use lumen_types::{AccountId, Hash256, KeyPair, SequenceNumber, Signature};
use serde::{Deserialize, Serialize};

use crate::error::TransactionError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Create and fund a new account.
    CreateAccount {
        destination: AccountId,
        starting_balance: i64,
    },
    /// Move native balance to an existing account.
    Payment { destination: AccountId, amount: i64 },
    /// Raise the source account's sequence number.
    BumpSequence { bump_to: SequenceNumber },
}

/// The signed body of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub source_account: AccountId,
    /// Total fee offered, in stroops.
    pub fee: u32,
    pub seq_num: SequenceNumber,
    #[serde(default)]
    pub memo: Option<String>,
    pub operations: Vec<Operation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedSignature {
    /// Last four bytes of the signing key.
    pub hint: [u8; 4],
    pub signature: Signature,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    pub tx: Transaction,
    #[serde(default)]
    pub signatures: Vec<DecoratedSignature>,
}

impl TransactionEnvelope {
    pub fn new(tx: Transaction) -> Self {
        Self {
            tx,
            signatures: Vec::new(),
        }
    }

    /// The hash signers commit to: network id followed by the encoded body.
    pub fn signature_payload(&self, network_id: &Hash256) -> Result<Hash256, TransactionError> {
        let body =
            bincode::serialize(&self.tx).map_err(|e| TransactionError::Encoding(e.to_string()))?;
        Ok(sha256_multi(&[network_id.as_bytes(), &body]))
    }

    /// Append a signature by `signer` over the payload for `network_id`.
    pub fn sign(&mut self, network_id: &Hash256, signer: &KeyPair) -> Result<(), TransactionError> {
        let payload = self.signature_payload(network_id)?;
        self.signatures.push(DecoratedSignature {
            hint: signer.public.hint(),
            signature: sign_message(payload.as_bytes(), &signer.private),
        });
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        bincode::serialize(self).map_err(|e| TransactionError::Encoding(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        bincode::deserialize(bytes).map_err(|e| TransactionError::Decoding(e.to_string()))
    }
}
