//! Admission control: trimming an oversized set down to ledger capacity.
//!
//! Transactions are split into privileged and ordinary ones. Ordinary
//! transactions are guaranteed `unprivileged_reserve(max)` slots; privileged
//! ones get the rest. Either side may use capacity the other leaves unused.
//! Within each side the lowest-priority transactions go first.

use lumen_store::LedgerView;
use lumen_transactions::TransactionFramePtr;

use crate::ordering::{account_fee_ratios, SurgeSorter};
use crate::tx_set::TxSetFrame;
use crate::whitelist::PrivilegePolicy;

impl TxSetFrame {
    /// Trim the set to `ledger.max_tx_set_size()`.
    ///
    /// Returns the removed transactions. A set already within capacity is
    /// left untouched.
    pub fn surge_pricing_filter(
        &mut self,
        ledger: &dyn LedgerView,
        policy: &dyn PrivilegePolicy,
    ) -> Vec<TransactionFramePtr> {
        let max = ledger.max_tx_set_size();
        if self.len() <= max {
            return Vec::new();
        }
        tracing::warn!(txs = self.len(), max, "surge pricing in effect");

        let (mut privileged, unprivileged): (Vec<_>, Vec<_>) = self
            .transactions()
            .iter()
            .cloned()
            .partition(|tx| policy.is_privileged(tx.source_id()));

        let reserve = policy.unprivileged_reserve(max).min(unprivileged.len());
        let fee_ratios = account_fee_ratios(self.transactions(), ledger);
        let holder = policy.distinguished_account();

        let mut removed = Vec::new();

        let privileged_capacity = max.saturating_sub(reserve);
        SurgeSorter::privileged(&fee_ratios, holder).sort(&mut privileged);
        for tx in privileged.iter().skip(privileged_capacity) {
            if self.remove_transaction(tx) {
                removed.push(tx.clone());
            }
        }

        let extra = privileged_capacity.saturating_sub(privileged.len());
        let unprivileged_capacity = reserve + extra;
        if unprivileged.len() > unprivileged_capacity {
            let mut ranked = unprivileged;
            SurgeSorter::unprivileged(&fee_ratios, holder).sort(&mut ranked);
            for tx in ranked.iter().skip(unprivileged_capacity) {
                if self.remove_transaction(tx) {
                    removed.push(tx.clone());
                }
            }
        }

        tracing::debug!(
            removed = removed.len(),
            privileged = privileged.len(),
            reserve,
            remaining = self.len(),
            "surge pricing trimmed set"
        );
        removed
    }
}
