//! The transaction set frame.

use std::sync::Arc;

use lumen_crypto::sha256_multi;
use lumen_transactions::{TransactionFrame, TransactionFramePtr};
use lumen_types::Hash256;

use crate::ordering;
use crate::wire::TransactionSet;
use crate::HerderError;

/// A candidate or agreed set of transactions for the next ledger.
///
/// Holds shared transaction handles, the hash of the ledger the set applies
/// on top of, and a memoized contents hash. Every mutation drops the memo.
/// Duplicates are not filtered.
#[derive(Clone, Debug)]
pub struct TxSetFrame {
    previous_ledger_hash: Hash256,
    transactions: Vec<TransactionFramePtr>,
    hash: Option<Hash256>,
}

impl TxSetFrame {
    /// An empty set to build on top of `previous_ledger_hash`.
    pub fn new(previous_ledger_hash: Hash256) -> Self {
        Self {
            previous_ledger_hash,
            transactions: Vec::new(),
            hash: None,
        }
    }

    /// Rebuild a peer's set, decoding each envelope into a frame.
    pub fn from_wire(network_id: &Hash256, set: &TransactionSet) -> Result<Self, HerderError> {
        let transactions = set
            .txs
            .iter()
            .map(|env| TransactionFrame::from_envelope(network_id, env.clone()).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            previous_ledger_hash: set.previous_ledger_hash,
            transactions,
            hash: None,
        })
    }

    pub fn from_bytes(network_id: &Hash256, bytes: &[u8]) -> Result<Self, HerderError> {
        Self::from_wire(network_id, &TransactionSet::from_bytes(bytes)?)
    }

    /// The set in its current order. Call [`contents_hash`](Self::contents_hash)
    /// first to emit canonical order.
    pub fn to_wire(&self) -> TransactionSet {
        TransactionSet {
            previous_ledger_hash: self.previous_ledger_hash,
            txs: self
                .transactions
                .iter()
                .map(|tx| tx.envelope().clone())
                .collect(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, HerderError> {
        self.to_wire().to_bytes()
    }

    pub fn previous_ledger_hash(&self) -> &Hash256 {
        &self.previous_ledger_hash
    }

    pub fn set_previous_ledger_hash(&mut self, hash: Hash256) {
        self.previous_ledger_hash = hash;
        self.hash = None;
    }

    pub fn transactions(&self) -> &[TransactionFramePtr] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn add_transaction(&mut self, tx: TransactionFramePtr) {
        self.transactions.push(tx);
        self.hash = None;
    }

    /// Remove the first transaction with the same full hash as `tx`.
    ///
    /// Returns whether one was found. The memoized hash is dropped either way.
    pub fn remove_transaction(&mut self, tx: &TransactionFrame) -> bool {
        self.hash = None;
        match self
            .transactions
            .iter()
            .position(|t| t.full_hash() == tx.full_hash())
        {
            Some(pos) => {
                self.transactions.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Put the transactions in canonical order.
    pub fn sort_for_hash(&mut self) {
        ordering::sort_for_hash(&mut self.transactions);
        self.hash = None;
    }

    /// The set's identity: SHA-256 over the previous ledger hash and every
    /// envelope's wire bytes in canonical order.
    ///
    /// Leaves the transactions in canonical order.
    pub fn contents_hash(&mut self) -> Hash256 {
        if let Some(hash) = self.hash {
            return hash;
        }
        self.sort_for_hash();
        let mut parts: Vec<&[u8]> = Vec::with_capacity(self.transactions.len() + 1);
        parts.push(self.previous_ledger_hash.as_bytes());
        parts.extend(self.transactions.iter().map(|tx| tx.encoded()));
        let hash = sha256_multi(&parts);
        self.hash = Some(hash);
        hash
    }

    /// The order to apply the set in. See [`ordering::apply_order`].
    pub fn apply_order(&mut self) -> Vec<TransactionFramePtr> {
        let set_hash = self.contents_hash();
        ordering::apply_order(&self.transactions, &set_hash)
    }

    /// `txs:N, ops:M, base_fee:F` where `F` is the lowest per-operation fee.
    pub fn summary(&self) -> String {
        if self.transactions.is_empty() {
            return "empty tx set".to_string();
        }
        let ops: usize = self.transactions.iter().map(|tx| tx.op_count()).sum();
        let base_fee = self
            .transactions
            .iter()
            .filter(|tx| tx.op_count() > 0)
            .map(|tx| tx.fee() / tx.op_count() as i64)
            .min()
            .unwrap_or(0);
        format!(
            "txs:{}, ops:{}, base_fee:{}",
            self.transactions.len(),
            ops,
            base_fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{network, tx};
    use lumen_crypto::sha256;

    fn frame_with(txs: &[TransactionFramePtr]) -> TxSetFrame {
        let mut set = TxSetFrame::new(Hash256::new([7; 32]));
        for t in txs {
            set.add_transaction(Arc::clone(t));
        }
        set
    }

    #[test]
    fn empty_set_hashes_previous_ledger_only() {
        let mut set = TxSetFrame::new(Hash256::new([7; 32]));
        assert_eq!(set.contents_hash(), sha256(&[7u8; 32]));
        assert_eq!(set.summary(), "empty tx set");
    }

    #[test]
    fn hash_is_independent_of_insertion_order() {
        let txs = vec![tx(1, 1, 100), tx(2, 1, 100), tx(3, 1, 100)];
        let mut forward = frame_with(&txs);
        let reversed: Vec<_> = txs.iter().rev().cloned().collect();
        let mut backward = frame_with(&reversed);
        assert_eq!(forward.contents_hash(), backward.contents_hash());
        assert!(ordering::is_hash_ordered(forward.transactions()));
    }

    #[test]
    fn hash_matches_manual_digest() {
        let mut set = frame_with(&[tx(1, 1, 100), tx(2, 1, 100)]);
        let hash = set.contents_hash();
        let mut bytes = set.previous_ledger_hash().as_bytes().to_vec();
        for t in set.transactions() {
            bytes.extend_from_slice(t.encoded());
        }
        assert_eq!(hash, sha256(&bytes));
    }

    #[test]
    fn mutations_invalidate_cached_hash() {
        let mut set = frame_with(&[tx(1, 1, 100)]);
        let h1 = set.contents_hash();

        set.add_transaction(tx(2, 1, 100));
        let h2 = set.contents_hash();
        assert_ne!(h1, h2);

        set.set_previous_ledger_hash(Hash256::new([8; 32]));
        let h3 = set.contents_hash();
        assert_ne!(h2, h3);

        let extra = tx(2, 1, 100);
        assert!(set.remove_transaction(&extra));
        set.set_previous_ledger_hash(Hash256::new([7; 32]));
        assert_eq!(set.contents_hash(), h1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut set = frame_with(&[tx(1, 1, 100)]);
        assert!(!set.remove_transaction(&tx(1, 2, 100)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_takes_one_duplicate() {
        let t = tx(1, 1, 100);
        let mut set = frame_with(&[t.clone(), t.clone()]);
        assert!(set.remove_transaction(&t));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn wire_round_trip_preserves_hash() {
        let mut set = frame_with(&[tx(3, 1, 100), tx(1, 1, 100), tx(2, 5, 300)]);
        let hash = set.contents_hash();
        let bytes = set.to_bytes().unwrap();

        let mut decoded = TxSetFrame::from_bytes(&network(), &bytes).unwrap();
        assert_eq!(decoded.previous_ledger_hash(), set.previous_ledger_hash());
        assert!(ordering::is_hash_ordered(decoded.transactions()));
        assert_eq!(decoded.contents_hash(), hash);
    }

    #[test]
    fn from_bytes_rejects_garbage() {
        assert!(matches!(
            TxSetFrame::from_bytes(&network(), &[1, 2, 3]),
            Err(HerderError::Wire(_))
        ));
    }

    #[test]
    fn apply_order_is_permutation() {
        let mut set = frame_with(&[tx(1, 2, 100), tx(1, 1, 100), tx(2, 1, 100)]);
        let ordered = set.apply_order();
        let mut a: Vec<_> = ordered.iter().map(|t| *t.full_hash()).collect();
        let mut b: Vec<_> = set.transactions().iter().map(|t| *t.full_hash()).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn summary_reports_lowest_base_fee() {
        let set = frame_with(&[tx(1, 1, 300), tx(2, 1, 150)]);
        assert_eq!(set.summary(), "txs:2, ops:2, base_fee:150");
    }
}
