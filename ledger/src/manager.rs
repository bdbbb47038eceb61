//! Ledger manager: owns the current ledger state and publishes snapshots.

use std::sync::{Arc, RwLock};

use lumen_crypto::sha256_multi;
use lumen_store::AccountEntry;
use lumen_types::{Hash256, LastClosedLedger, LedgerHeader};

use crate::snapshot::{LedgerSnapshot, LedgerState};
use crate::LedgerError;

/// Holds the current ledger state behind a copy-on-write `Arc`.
///
/// Readers take a [`LedgerSnapshot`] and keep it for as long as they need a
/// consistent view. Writers clone the state, modify the clone, and swap it in;
/// snapshots already handed out are unaffected.
pub struct LedgerManager {
    state: RwLock<Arc<LedgerState>>,
}

impl LedgerManager {
    pub fn new(state: LedgerState) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
        }
    }

    /// A consistent read-only view of the current state.
    pub fn snapshot(&self) -> LedgerSnapshot {
        let guard = self.state.read().unwrap_or_else(|e| e.into_inner());
        LedgerSnapshot::new(Arc::clone(&guard))
    }

    pub fn last_closed_ledger(&self) -> LastClosedLedger {
        self.snapshot().state().last_closed.clone()
    }

    /// Insert or replace an account in the current state.
    pub fn put_account(&self, entry: AccountEntry) {
        self.update(|state| state.put_account(entry));
    }

    /// Advance to the next ledger, committing to the agreed transaction set.
    ///
    /// The new header keeps the fee and capacity parameters of its parent.
    /// Account changes from applying the set are published separately via
    /// [`put_account`](Self::put_account).
    pub fn close_ledger(
        &self,
        tx_set_hash: Hash256,
        close_time: u64,
    ) -> Result<LastClosedLedger, LedgerError> {
        let mut guard = self.state.write().unwrap_or_else(|e| e.into_inner());
        let parent = &guard.last_closed;
        let ledger_seq = parent
            .header
            .ledger_seq
            .checked_add(1)
            .ok_or(LedgerError::SequenceOverflow(parent.header.ledger_seq))?;

        let header = LedgerHeader {
            ledger_seq,
            previous_ledger_hash: parent.hash,
            close_time,
            ..parent.header.clone()
        };
        let hash = header_hash(&header, &tx_set_hash)?;
        let closed = LastClosedLedger { hash, header };

        Arc::make_mut(&mut guard).last_closed = closed.clone();
        tracing::debug!(
            ledger_seq,
            hash = %closed.hash.abbrev(),
            tx_set = %tx_set_hash.abbrev(),
            "closed ledger"
        );
        Ok(closed)
    }

    fn update(&self, f: impl FnOnce(&mut LedgerState)) {
        let mut guard = self.state.write().unwrap_or_else(|e| e.into_inner());
        f(Arc::make_mut(&mut guard));
    }
}

/// Identity of a closed ledger: SHA-256 over its encoded header and the
/// hash of the transaction set it applied.
pub fn header_hash(header: &LedgerHeader, tx_set_hash: &Hash256) -> Result<Hash256, LedgerError> {
    let encoded = bincode::serialize(header).map_err(|e| LedgerError::Serialization(e.to_string()))?;
    Ok(sha256_multi(&[&encoded, tx_set_hash.as_bytes()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::genesis_state;
    use lumen_store::LedgerView;
    use lumen_types::{AccountId, NetworkId};

    fn account(balance: i64) -> AccountEntry {
        AccountEntry {
            account_id: AccountId::new([3; 32]),
            balance,
            seq_num: 0,
            num_sub_entries: 0,
        }
    }

    #[test]
    fn snapshot_is_not_affected_by_later_writes() {
        let manager = LedgerManager::new(genesis_state(NetworkId::Dev));
        manager.put_account(account(10));
        let before = manager.snapshot();

        manager.put_account(account(99));

        let id = AccountId::new([3; 32]);
        assert_eq!(before.load_account(&id).unwrap().balance, 10);
        assert_eq!(manager.snapshot().load_account(&id).unwrap().balance, 99);
    }

    #[test]
    fn close_ledger_chains_hashes() {
        let manager = LedgerManager::new(genesis_state(NetworkId::Dev));
        let genesis = manager.last_closed_ledger();

        let next = manager.close_ledger(Hash256::new([5; 32]), 60).unwrap();
        assert_eq!(next.header.ledger_seq, genesis.header.ledger_seq + 1);
        assert_eq!(next.header.previous_ledger_hash, genesis.hash);
        assert_eq!(next.header.close_time, 60);
        assert_ne!(next.hash, genesis.hash);
        assert_eq!(manager.last_closed_ledger(), next);
    }

    #[test]
    fn header_hash_commits_to_tx_set() {
        let header = genesis_state(NetworkId::Dev).last_closed.header;
        let a = header_hash(&header, &Hash256::new([1; 32])).unwrap();
        let b = header_hash(&header, &Hash256::new([2; 32])).unwrap();
        assert_ne!(a, b);
    }
}
