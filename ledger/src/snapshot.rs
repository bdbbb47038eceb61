//! Ledger state and immutable snapshots of it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lumen_store::{AccountEntry, LedgerView, StoreError};
use lumen_types::{AccountId, LastClosedLedger};

/// The complete ledger state: last closed ledger plus every account.
///
/// Serialized with accounts as a list so that JSON fixtures stay readable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LedgerStateRepr", into = "LedgerStateRepr")]
pub struct LedgerState {
    pub last_closed: LastClosedLedger,
    pub accounts: BTreeMap<AccountId, AccountEntry>,
}

#[derive(Serialize, Deserialize)]
struct LedgerStateRepr {
    last_closed: LastClosedLedger,
    #[serde(default)]
    accounts: Vec<AccountEntry>,
}

impl From<LedgerStateRepr> for LedgerState {
    fn from(repr: LedgerStateRepr) -> Self {
        let accounts = repr
            .accounts
            .into_iter()
            .map(|entry| (entry.account_id, entry))
            .collect();
        Self {
            last_closed: repr.last_closed,
            accounts,
        }
    }
}

impl From<LedgerState> for LedgerStateRepr {
    fn from(state: LedgerState) -> Self {
        Self {
            last_closed: state.last_closed,
            accounts: state.accounts.into_values().collect(),
        }
    }
}

impl LedgerState {
    pub fn new(last_closed: LastClosedLedger) -> Self {
        Self {
            last_closed,
            accounts: BTreeMap::new(),
        }
    }

    /// Insert or replace an account entry.
    pub fn put_account(&mut self, entry: AccountEntry) {
        self.accounts.insert(entry.account_id, entry);
    }
}

impl LedgerView for LedgerState {
    fn last_closed_ledger(&self) -> &LastClosedLedger {
        &self.last_closed
    }

    fn load_account(&self, account_id: &AccountId) -> Result<AccountEntry, StoreError> {
        self.accounts
            .get(account_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(account_id.to_string()))
    }
}

/// An immutable, cheaply clonable view of one ledger state.
#[derive(Clone, Debug)]
pub struct LedgerSnapshot(Arc<LedgerState>);

impl LedgerSnapshot {
    pub fn new(state: Arc<LedgerState>) -> Self {
        Self(state)
    }

    pub fn state(&self) -> &LedgerState {
        &self.0
    }
}

impl From<LedgerState> for LedgerSnapshot {
    fn from(state: LedgerState) -> Self {
        Self(Arc::new(state))
    }
}

impl LedgerView for LedgerSnapshot {
    fn last_closed_ledger(&self) -> &LastClosedLedger {
        self.0.last_closed_ledger()
    }

    fn load_account(&self, account_id: &AccountId) -> Result<AccountEntry, StoreError> {
        self.0.load_account(account_id)
    }
}
