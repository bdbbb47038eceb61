//! Shared utilities for the Lumen ledger.

pub mod logging;

pub use logging::{init_logging, LogFormat, LogFormatError};
