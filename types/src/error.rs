//! Top-level error type shared across crates.

use thiserror::Error;

/// Errors raised while parsing or constructing fundamental types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LumenError {
    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
