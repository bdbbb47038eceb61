//! The three orders a transaction set is arranged in.
//!
//! - Canonical order: ascending full hash. Used for hashing and required
//!   before validation.
//! - Apply order: per-account ascending sequence, interleaved in rounds and
//!   shuffled within each round by `full_hash ^ set_hash`. Nobody can pick a
//!   position in the apply order without changing the set hash.
//! - Surge priority: privileged holder first, then by account (privileged)
//!   or by descending account fee ratio (everyone else).

use std::cmp::Ordering;
use std::collections::BTreeMap;

use lumen_store::LedgerView;
use lumen_transactions::TransactionFramePtr;
use lumen_types::{less_than_xored, AccountId, Hash256};

/// Sort into canonical order.
pub fn sort_for_hash(txs: &mut [TransactionFramePtr]) {
    txs.sort_by(|a, b| a.full_hash().cmp(b.full_hash()));
}

/// Whether `txs` is in canonical order. Equal neighbours are accepted.
pub fn is_hash_ordered(txs: &[TransactionFramePtr]) -> bool {
    txs.windows(2).all(|w| w[0].full_hash() <= w[1].full_hash())
}

fn by_seq(a: &TransactionFramePtr, b: &TransactionFramePtr) -> Ordering {
    a.seq_num()
        .cmp(&b.seq_num())
        .then_with(|| a.full_hash().cmp(b.full_hash()))
}

fn xored_cmp(l: &Hash256, r: &Hash256, mask: &Hash256) -> Ordering {
    if less_than_xored(l, r, mask) {
        Ordering::Less
    } else if less_than_xored(r, l, mask) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Order `txs` for application on top of the ledger.
///
/// Round `i` holds the `i`-th transaction (by sequence number) of every
/// account. Rounds are emitted in order; each round is sorted by its full
/// hashes XORed with `set_hash`. Does not modify `txs`.
pub fn apply_order(txs: &[TransactionFramePtr], set_hash: &Hash256) -> Vec<TransactionFramePtr> {
    let mut sorted = txs.to_vec();
    sorted.sort_by(by_seq);

    let mut rounds: Vec<Vec<TransactionFramePtr>> = Vec::new();
    let mut seen: BTreeMap<AccountId, usize> = BTreeMap::new();
    for tx in sorted {
        let round = seen.entry(*tx.source_id()).or_insert(0);
        if *round >= rounds.len() {
            rounds.resize_with(*round + 1, Vec::new);
        }
        rounds[*round].push(tx);
        *round += 1;
    }

    let mut ordered = Vec::with_capacity(txs.len());
    for mut round in rounds {
        round.sort_by(|a, b| xored_cmp(a.full_hash(), b.full_hash(), set_hash));
        ordered.extend(round);
    }
    ordered
}

/// Lowest fee ratio offered by each account in `txs`.
///
/// A stored ratio of exactly zero counts as unset and is replaced by the next
/// ratio seen for that account, whatever its value. Nodes must agree on this
/// map bit for bit, so the rule stays as is.
pub fn account_fee_ratios(
    txs: &[TransactionFramePtr],
    ledger: &dyn LedgerView,
) -> BTreeMap<AccountId, f64> {
    let mut ratios = BTreeMap::new();
    for tx in txs {
        let ratio = tx.fee_ratio(ledger);
        let slot = ratios.entry(*tx.source_id()).or_insert(0.0);
        if *slot == 0.0 || ratio < *slot {
            *slot = ratio;
        }
    }
    ratios
}

/// Priority order used by surge pricing. Highest priority sorts first.
pub struct SurgeSorter<'a> {
    fee_ratios: &'a BTreeMap<AccountId, f64>,
    privileged: bool,
    holder: Option<&'a AccountId>,
}

impl<'a> SurgeSorter<'a> {
    /// For privileged transactions: fee ratios are ignored.
    pub fn privileged(
        fee_ratios: &'a BTreeMap<AccountId, f64>,
        holder: Option<&'a AccountId>,
    ) -> Self {
        Self {
            fee_ratios,
            privileged: true,
            holder,
        }
    }

    pub fn unprivileged(
        fee_ratios: &'a BTreeMap<AccountId, f64>,
        holder: Option<&'a AccountId>,
    ) -> Self {
        Self {
            fee_ratios,
            privileged: false,
            holder,
        }
    }

    fn ratio(&self, account: &AccountId) -> f64 {
        self.fee_ratios.get(account).copied().unwrap_or(0.0)
    }

    pub fn compare(&self, a: &TransactionFramePtr, b: &TransactionFramePtr) -> Ordering {
        let (sa, sb) = (a.source_id(), b.source_id());
        if sa == sb {
            return by_seq(a, b);
        }

        if let Some(holder) = self.holder {
            if sa == holder {
                return Ordering::Less;
            }
            if sb == holder {
                return Ordering::Greater;
            }
        }

        if self.privileged {
            return sa.cmp(sb);
        }

        match self.ratio(sb).total_cmp(&self.ratio(sa)) {
            Ordering::Equal => sa.cmp(sb),
            higher_first => higher_first,
        }
    }

    pub fn sort(&self, txs: &mut [TransactionFramePtr]) {
        txs.sort_by(|a, b| self.compare(a, b));
    }
}
