//! Account entries and the read-only ledger view.

use crate::StoreError;
use lumen_types::{AccountId, LastClosedLedger, SequenceNumber};
use serde::{Deserialize, Serialize};

/// Per-account state stored in the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub account_id: AccountId,
    /// Native balance in stroops.
    pub balance: i64,
    /// Sequence number of the last transaction applied from this account.
    pub seq_num: SequenceNumber,
    /// Trustlines, offers, data entries and extra signers owned by the account.
    #[serde(default)]
    pub num_sub_entries: u32,
}

/// Read access to one consistent ledger state.
///
/// Every call made through a single `LedgerView` value must observe the same
/// state. Implementations backed by mutable storage hand out snapshots rather
/// than live handles.
pub trait LedgerView {
    /// The ledger that transaction sets are built on top of.
    fn last_closed_ledger(&self) -> &LastClosedLedger;

    /// Load an account, or `StoreError::NotFound` if it does not exist.
    fn load_account(&self, account_id: &AccountId) -> Result<AccountEntry, StoreError>;

    fn base_fee(&self) -> u32 {
        self.last_closed_ledger().header.base_fee
    }

    fn max_tx_set_size(&self) -> usize {
        self.last_closed_ledger().header.max_tx_set_size as usize
    }

    /// Minimum balance `account` must retain after paying fees.
    fn minimum_balance(&self, account: &AccountEntry) -> i64 {
        self.last_closed_ledger()
            .header
            .minimum_balance(account.num_sub_entries)
    }
}
