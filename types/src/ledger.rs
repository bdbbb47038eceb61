//! Ledger header data consumed by transaction-set construction and validation.

use serde::{Deserialize, Serialize};

use crate::hash::Hash256;

/// Network-wide parameters in effect for the next ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerHeader {
    /// Sequence number of this ledger.
    pub ledger_seq: u32,
    /// Hash of the ledger this one closed on top of.
    pub previous_ledger_hash: Hash256,
    /// Minimum fee per operation.
    pub base_fee: u32,
    /// Reserve required per account entry and sub-entry.
    pub base_reserve: u32,
    /// Maximum number of transactions in a transaction set.
    pub max_tx_set_size: u32,
    /// Close time in Unix seconds.
    pub close_time: u64,
}

impl LedgerHeader {
    /// Minimum balance an account with `num_sub_entries` sub-entries must keep.
    pub fn minimum_balance(&self, num_sub_entries: u32) -> i64 {
        (2 + i64::from(num_sub_entries)) * i64::from(self.base_reserve)
    }

    /// Minimum fee for a transaction with `op_count` operations.
    pub fn min_fee(&self, op_count: usize) -> i64 {
        i64::from(self.base_fee) * op_count.max(1) as i64
    }
}

/// The last closed ledger: its identifying hash plus header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastClosedLedger {
    pub hash: Hash256,
    pub header: LedgerHeader,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> LedgerHeader {
        LedgerHeader {
            ledger_seq: 7,
            previous_ledger_hash: Hash256::ZERO,
            base_fee: 100,
            base_reserve: 5_000_000,
            max_tx_set_size: 50,
            close_time: 0,
        }
    }

    #[test]
    fn minimum_balance_counts_sub_entries() {
        assert_eq!(header().minimum_balance(0), 10_000_000);
        assert_eq!(header().minimum_balance(3), 25_000_000);
    }

    #[test]
    fn min_fee_charges_at_least_one_operation() {
        assert_eq!(header().min_fee(0), 100);
        assert_eq!(header().min_fee(1), 100);
        assert_eq!(header().min_fee(4), 400);
    }
}
