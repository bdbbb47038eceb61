use lumen_store::StoreError;
use lumen_transactions::{TransactionError, TxValidationError};
use lumen_types::{AccountId, Hash256, SequenceNumber};
use thiserror::Error;

/// A transaction that failed any of its local validity checks (operations,
/// fee, source account, sequence number or signature), given the sequence
/// number of the previous valid transaction from the same account in the
/// set. `reason` says which check failed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("tx {tx_hash} from {account} (seq {seq_num}, last seq {last_seq}) is invalid: {reason}")]
pub struct SequenceViolation {
    pub tx_hash: Hash256,
    pub account: AccountId,
    pub seq_num: SequenceNumber,
    pub last_seq: SequenceNumber,
    pub reason: TxValidationError,
}

/// An account that cannot pay the combined fees of its transactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "account {account} can't pay fees: balance {balance} - fees {total_fee} < minimum {minimum_balance} (last tx {last_tx_hash})"
)]
pub struct AffordabilityViolation {
    pub account: AccountId,
    pub last_tx_hash: Hash256,
    pub balance: i64,
    pub total_fee: i64,
    pub minimum_balance: i64,
}

#[derive(Debug, Error)]
pub enum HerderError {
    #[error("transactions are not in hash order at position {position}")]
    NotCanonicalOrder { position: usize },

    #[error("invalid transaction: {0}")]
    SequenceViolation(SequenceViolation),

    #[error("affordability violation: {0}")]
    AffordabilityViolation(AffordabilityViolation),

    #[error("set built on {actual}, expected last closed ledger {expected}")]
    PreviousLedgerMismatch { expected: Hash256, actual: Hash256 },

    #[error("too many transactions: {count} > {max}")]
    TooManyTransactions { count: usize, max: usize },

    #[error("transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("wire error: {0}")]
    Wire(String),

    #[error("config error: {0}")]
    Config(String),
}
