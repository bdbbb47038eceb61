//! Shared, immutable transaction handles.

use std::sync::Arc;

use lumen_crypto::sha256;
use lumen_store::LedgerView;
use lumen_types::{AccountId, Hash256, SequenceNumber};

use crate::envelope::TransactionEnvelope;
use crate::error::{TransactionError, TxValidationError};
use crate::validation;

/// Transaction sets share frames; removing one from a set never affects
/// another set holding the same frame.
pub type TransactionFramePtr = Arc<TransactionFrame>;

/// A decoded envelope together with its identities.
///
/// The encoded bytes and both hashes are computed once at construction, so
/// `full_hash` is stable for the lifetime of the frame.
#[derive(Debug)]
pub struct TransactionFrame {
    envelope: TransactionEnvelope,
    encoded: Vec<u8>,
    full_hash: Hash256,
    contents_hash: Hash256,
}

impl TransactionFrame {
    pub fn from_envelope(
        network_id: &Hash256,
        envelope: TransactionEnvelope,
    ) -> Result<Self, TransactionError> {
        let encoded = envelope.to_bytes()?;
        let full_hash = sha256(&encoded);
        let contents_hash = envelope.signature_payload(network_id)?;
        Ok(Self {
            envelope,
            encoded,
            full_hash,
            contents_hash,
        })
    }

    /// Decode a frame from the wire bytes of its envelope.
    pub fn from_bytes(network_id: &Hash256, bytes: &[u8]) -> Result<Self, TransactionError> {
        Self::from_envelope(network_id, TransactionEnvelope::from_bytes(bytes)?)
    }

    pub fn into_ptr(self) -> TransactionFramePtr {
        Arc::new(self)
    }

    pub fn envelope(&self) -> &TransactionEnvelope {
        &self.envelope
    }

    /// The envelope's wire bytes, exactly as hashed.
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    /// SHA-256 of the encoded envelope, signatures included.
    pub fn full_hash(&self) -> &Hash256 {
        &self.full_hash
    }

    /// The hash signers commit to (network id + body, no signatures).
    pub fn contents_hash(&self) -> &Hash256 {
        &self.contents_hash
    }

    pub fn source_id(&self) -> &AccountId {
        &self.envelope.tx.source_account
    }

    pub fn seq_num(&self) -> SequenceNumber {
        self.envelope.tx.seq_num
    }

    pub fn fee(&self) -> i64 {
        i64::from(self.envelope.tx.fee)
    }

    pub fn op_count(&self) -> usize {
        self.envelope.tx.operations.len()
    }

    /// Smallest fee the ledger accepts for this transaction.
    pub fn min_fee(&self, ledger: &dyn LedgerView) -> i64 {
        ledger.last_closed_ledger().header.min_fee(self.op_count())
    }

    /// Offered fee relative to the minimum.
    pub fn fee_ratio(&self, ledger: &dyn LedgerView) -> f64 {
        self.fee() as f64 / self.min_fee(ledger) as f64
    }

    /// Check validity against `ledger`, given the sequence number of the
    /// previous transaction from the same account (0 for "use the ledger's").
    pub fn check_valid(
        &self,
        ledger: &dyn LedgerView,
        last_seq: SequenceNumber,
        fee_exempt: bool,
    ) -> Result<(), TxValidationError> {
        validation::check_valid(self, ledger, last_seq, fee_exempt)
    }
}
