use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("ledger sequence overflow at {0}")]
    SequenceOverflow(u32),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage error: {0}")]
    Storage(#[from] lumen_store::StoreError),
}
