//! Cryptographic primitives for the Lumen ledger.
//!
//! - **Ed25519** for signing and signature verification
//! - **SHA-256** for transaction, transaction-set and network identities

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{network_id_hash, sha256, sha256_multi};
pub use keys::{account_of, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
