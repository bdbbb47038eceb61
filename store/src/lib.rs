//! Abstract ledger-state traits for the Lumen ledger.
//!
//! Transaction validation and transaction-set construction depend only on
//! [`LedgerView`]; backends (the in-memory ledger manager, test fixtures)
//! implement it.

pub mod account;
pub mod error;

pub use account::{AccountEntry, LedgerView};
pub use error::StoreError;
