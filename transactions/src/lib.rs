//! Lumen transactions and their validation logic.
//!
//! - [`envelope`]: the signed wire envelope and its operations.
//! - [`frame`]: [`TransactionFrame`], the immutable shared handle the
//!   transaction-set engine works with (full hash, source, sequence, fee).
//! - [`validation`]: stateless operation checks and the stateful validity
//!   check against a ledger view and the last accepted sequence number.
//! - [`builder`]: assembling and signing envelopes.

pub mod builder;
pub mod envelope;
pub mod error;
pub mod frame;
pub mod validation;

pub use builder::TransactionBuilder;
pub use envelope::{DecoratedSignature, Operation, Transaction, TransactionEnvelope};
pub use error::{TransactionError, TxValidationError};
pub use frame::{TransactionFrame, TransactionFramePtr};
