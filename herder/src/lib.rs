//! Transaction-set construction and validation for the Lumen ledger.
//!
//! A [`TxSetFrame`] is the unit nodes propose and vote on. Every node must
//! derive the same hash, the same trimmed contents and the same apply order
//! from the same candidates, so everything here is deterministic.
//!
//! - [`tx_set`]: the frame itself, with its contents, cached hash, wire conversion.
//! - [`ordering`]: canonical (hash) order, apply order, surge priority order.
//! - [`surge_pricing`]: admission control down to the ledger's capacity.
//! - [`validation`]: the per-account sequence and fee walk, with pluggable
//!   [`ViolationHandler`]s for strict checking and trimming.
//! - [`whitelist`]: the privileged-account policy.
//! - [`config`]: TOML configuration.
//! - [`wire`]: the serialized transaction set.

pub mod config;
pub mod error;
pub mod ordering;
pub mod surge_pricing;
pub mod tx_set;
pub mod validation;
pub mod whitelist;
pub mod wire;

#[cfg(test)]
mod fixtures;

pub use config::{HerderConfig, WhitelistConfig};
pub use error::{AffordabilityViolation, HerderError, SequenceViolation};
pub use ordering::{account_fee_ratios, apply_order, sort_for_hash, SurgeSorter};
pub use tx_set::TxSetFrame;
pub use validation::{StrictCheck, Trim, ViolationHandler, ViolationResponse};
pub use whitelist::{PrivilegePolicy, Whitelist};
pub use wire::TransactionSet;
