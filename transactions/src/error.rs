use lumen_store::StoreError;
use lumen_types::{AccountId, SequenceNumber};
use thiserror::Error;

/// Encoding and decoding failures of transaction envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("failed to encode transaction envelope: {0}")]
    Encoding(String),

    #[error("failed to decode transaction envelope: {0}")]
    Decoding(String),
}

/// Why a transaction is not valid against a given ledger state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxValidationError {
    #[error("transaction has no operations")]
    MissingOperation,

    #[error("operation {index} is malformed: {reason}")]
    MalformedOperation { index: usize, reason: String },

    #[error("fee {fee} is below the minimum {min_fee}")]
    InsufficientFee { fee: i64, min_fee: i64 },

    #[error("source account {0} does not exist")]
    NoAccount(AccountId),

    #[error("bad sequence number: expected {expected}, got {actual}")]
    BadSeq {
        expected: SequenceNumber,
        actual: SequenceNumber,
    },

    #[error("missing a valid signature from the source account")]
    BadAuth,

    #[error("ledger read failed: {0}")]
    Store(StoreError),
}
