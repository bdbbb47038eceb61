//! Ledger state for the Lumen ledger.
//!
//! The ledger manager owns the current state (last closed ledger + accounts)
//! and hands out immutable [`LedgerSnapshot`]s. A validation pass reads one
//! snapshot from start to finish, so ledger updates published mid-pass are
//! never observed.

pub mod error;
pub mod genesis;
pub mod manager;
pub mod snapshot;

pub use error::LedgerError;
pub use genesis::{genesis_state, root_keypair, GENESIS_TOTAL_COINS};
pub use manager::LedgerManager;
pub use snapshot::{LedgerSnapshot, LedgerState};
