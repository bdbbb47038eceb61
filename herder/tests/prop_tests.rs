use proptest::prelude::*;

use lumen_crypto::{account_of, keypair_from_seed, network_id_hash};
use lumen_herder::{apply_order, TxSetFrame, Whitelist};
use lumen_ledger::LedgerState;
use lumen_transactions::{TransactionBuilder, TransactionFramePtr};
use lumen_types::{AccountId, Hash256, LastClosedLedger, LedgerHeader, NetworkId};

fn tx(account: u8, seq: i64, fee: u32) -> TransactionFramePtr {
    let kp = keypair_from_seed(&[account; 32]);
    TransactionBuilder::new(account_of(&kp), seq)
        .fee(fee)
        .bump_sequence(0)
        .into_ptr(&network_id_hash(NetworkId::Dev), &[&kp])
        .unwrap()
}

fn ledger(max: u32) -> LedgerState {
    LedgerState::new(LastClosedLedger {
        hash: Hash256::ZERO,
        header: LedgerHeader {
            ledger_seq: 2,
            previous_ledger_hash: Hash256::ZERO,
            base_fee: 100,
            base_reserve: 0,
            max_tx_set_size: max,
            close_time: 0,
        },
    })
}

/// (account seed, sequence, fee) triples; accounts are drawn from a small
/// pool so several transactions share a source.
fn arb_txs() -> impl Strategy<Value = Vec<(u8, i64, u32)>> {
    prop::collection::vec((1u8..6, 1i64..20, 0u32..1_000), 0..12)
}

fn build(specs: &[(u8, i64, u32)]) -> Vec<TransactionFramePtr> {
    specs.iter().map(|&(a, s, f)| tx(a, s, f)).collect()
}

fn set_of(txs: &[TransactionFramePtr]) -> TxSetFrame {
    let mut set = TxSetFrame::new(Hash256::new([3; 32]));
    for t in txs {
        set.add_transaction(t.clone());
    }
    set
}

fn hashes(txs: &[TransactionFramePtr]) -> Vec<Hash256> {
    let mut h: Vec<_> = txs.iter().map(|t| *t.full_hash()).collect();
    h.sort();
    h
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The set hash does not depend on insertion order.
    #[test]
    fn hash_ignores_insertion_order(specs in arb_txs()) {
        let txs = build(&specs);
        let mut forward = set_of(&txs);
        let reversed: Vec<_> = txs.iter().rev().cloned().collect();
        let mut backward = set_of(&reversed);
        prop_assert_eq!(forward.contents_hash(), backward.contents_hash());
        prop_assert_eq!(forward.contents_hash(), forward.contents_hash());
    }

    /// Apply order is a permutation that keeps each account's sequence
    /// numbers non-decreasing.
    #[test]
    fn apply_order_is_sequence_respecting_permutation(
        specs in arb_txs(),
        mask in prop::array::uniform32(0u8..),
    ) {
        let txs = build(&specs);
        let ordered = apply_order(&txs, &Hash256::new(mask));
        prop_assert_eq!(hashes(&ordered), hashes(&txs));

        let mut last: std::collections::BTreeMap<AccountId, i64> = Default::default();
        for t in &ordered {
            if let Some(prev) = last.insert(*t.source_id(), t.seq_num()) {
                prop_assert!(prev <= t.seq_num());
            }
        }
    }

    /// Surge pricing never leaves more than `max` and leaves small sets alone.
    #[test]
    fn surge_pricing_respects_capacity(specs in arb_txs(), max in 0u32..8) {
        let txs = build(&specs);
        let state = ledger(max);
        let mut set = set_of(&txs);
        let removed = set.surge_pricing_filter(&state, &Whitelist::disabled());

        prop_assert!(set.len() <= max as usize);
        prop_assert_eq!(set.len() + removed.len(), txs.len());
        if txs.len() <= max as usize {
            prop_assert!(removed.is_empty());
        }
    }

    /// The distinguished account's transactions survive whenever they fit.
    #[test]
    fn holder_transactions_kept_when_they_fit(
        specs in arb_txs(),
        holder_count in 0usize..3,
        max in 4u32..8,
    ) {
        let holder_kp = keypair_from_seed(&[9; 32]);
        let holder = account_of(&holder_kp);
        let mut txs = build(&specs);
        for seq in 0..holder_count {
            txs.push(tx(9, seq as i64 + 1, 0));
        }
        let policy = Whitelist::new(Some(holder), [], 5);
        let mut set = set_of(&txs);
        set.surge_pricing_filter(&ledger(max), &policy);

        let kept = set.transactions().iter().filter(|t| *t.source_id() == holder).count();
        prop_assert_eq!(kept, holder_count);
    }
}
