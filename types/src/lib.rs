//! Fundamental types for the Lumen ledger.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! 256-bit hashes, account identifiers, keys and signatures, network identifiers
//! and the ledger header consumed by transaction-set validation.

pub mod account;
pub mod error;
pub mod hash;
pub mod keys;
pub mod ledger;
pub mod network;
mod serde_hex;

pub use account::{AccountId, SequenceNumber};
pub use error::LumenError;
pub use hash::{less_than_xored, Hash256};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use ledger::{LastClosedLedger, LedgerHeader};
pub use network::NetworkId;
