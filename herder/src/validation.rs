//! Per-account validation of a transaction set.
//!
//! One traversal serves both the strict acceptance check of an agreed set
//! and the best-effort trim of a locally built candidate. The traversal only
//! detects problems; a [`ViolationHandler`] decides what happens next.

use std::collections::BTreeMap;

use lumen_store::LedgerView;
use lumen_transactions::TransactionFramePtr;
use lumen_types::{AccountId, Hash256, SequenceNumber};

use crate::error::{AffordabilityViolation, HerderError, SequenceViolation};
use crate::tx_set::TxSetFrame;
use crate::whitelist::PrivilegePolicy;

/// What the traversal should do about a violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationResponse {
    /// Leave the set as is and keep going.
    Continue,
    /// Remove the offending transaction(s) from the set and keep going.
    Drop,
    /// Fail the whole operation.
    Abort,
}

pub trait ViolationHandler {
    fn on_sequence_violation(&mut self, violation: &SequenceViolation) -> ViolationResponse;

    /// `group` is every transaction from the account, in sequence order.
    fn on_affordability_violation(
        &mut self,
        violation: &AffordabilityViolation,
        group: &[TransactionFramePtr],
    ) -> ViolationResponse;
}

/// Reject the set on the first violation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictCheck;

impl ViolationHandler for StrictCheck {
    fn on_sequence_violation(&mut self, _: &SequenceViolation) -> ViolationResponse {
        ViolationResponse::Abort
    }

    fn on_affordability_violation(
        &mut self,
        _: &AffordabilityViolation,
        _: &[TransactionFramePtr],
    ) -> ViolationResponse {
        ViolationResponse::Abort
    }
}

/// Remove whatever is invalid: the transaction that failed its check, or
/// every transaction of an account that can't pay for them all.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trim;

impl ViolationHandler for Trim {
    fn on_sequence_violation(&mut self, _: &SequenceViolation) -> ViolationResponse {
        ViolationResponse::Drop
    }

    fn on_affordability_violation(
        &mut self,
        _: &AffordabilityViolation,
        _: &[TransactionFramePtr],
    ) -> ViolationResponse {
        ViolationResponse::Drop
    }
}

impl TxSetFrame {
    /// Walk every account's transactions in sequence order, checking each
    /// against the previous valid one and the account's ability to pay the
    /// combined fees.
    ///
    /// The set must already be in canonical order, otherwise this fails with
    /// [`HerderError::NotCanonicalOrder`] without consulting `handler`.
    /// Privileged accounts are charged no fees and are not held to the
    /// ledger's minimum fee. Returns the transactions the
    /// handler asked to drop.
    pub fn check_or_trim(
        &mut self,
        ledger: &dyn LedgerView,
        policy: &dyn PrivilegePolicy,
        handler: &mut dyn ViolationHandler,
    ) -> Result<Vec<TransactionFramePtr>, HerderError> {
        let prev = self.previous_ledger_hash().abbrev();

        let mut groups: BTreeMap<AccountId, Vec<TransactionFramePtr>> = BTreeMap::new();
        let mut last_hash = Hash256::ZERO;
        for (position, tx) in self.transactions().iter().enumerate() {
            if *tx.full_hash() < last_hash {
                tracing::debug!(prev = %prev, position, "bad tx set: not sorted correctly");
                return Err(HerderError::NotCanonicalOrder { position });
            }
            groups.entry(*tx.source_id()).or_default().push(tx.clone());
            last_hash = *tx.full_hash();
        }

        let mut removed = Vec::new();
        for (account, mut group) in groups {
            group.sort_by_key(|tx| tx.seq_num());

            let mut last_seq: SequenceNumber = 0;
            let mut total_fee: i64 = 0;
            let mut last_valid: Option<&TransactionFramePtr> = None;
            let privileged = policy.is_privileged(&account);
            for tx in &group {
                if let Err(reason) = tx.check_valid(ledger, last_seq, privileged) {
                    let violation = SequenceViolation {
                        tx_hash: *tx.full_hash(),
                        account,
                        seq_num: tx.seq_num(),
                        last_seq,
                        reason,
                    };
                    tracing::debug!(prev = %prev, %violation, "bad tx set: tx invalid");
                    match handler.on_sequence_violation(&violation) {
                        ViolationResponse::Continue => continue,
                        ViolationResponse::Drop => {
                            if self.remove_transaction(tx) {
                                removed.push(tx.clone());
                            }
                            continue;
                        }
                        ViolationResponse::Abort => {
                            return Err(HerderError::SequenceViolation(violation))
                        }
                    }
                }
                if !privileged {
                    total_fee = total_fee.saturating_add(tx.fee());
                }
                last_seq = tx.seq_num();
                last_valid = Some(tx);
            }

            let Some(last) = last_valid else {
                continue;
            };
            let entry = ledger.load_account(&account)?;
            let minimum_balance = ledger.minimum_balance(&entry);
            if entry.balance.saturating_sub(total_fee) >= minimum_balance {
                continue;
            }

            let violation = AffordabilityViolation {
                account,
                last_tx_hash: *last.full_hash(),
                balance: entry.balance,
                total_fee,
                minimum_balance,
            };
            tracing::debug!(prev = %prev, %violation, "bad tx set: account can't pay fee");
            match handler.on_affordability_violation(&violation, &group) {
                ViolationResponse::Continue => {}
                ViolationResponse::Drop => {
                    for tx in &group {
                        if self.remove_transaction(tx) {
                            removed.push(tx.clone());
                        }
                    }
                }
                ViolationResponse::Abort => {
                    return Err(HerderError::AffordabilityViolation(violation))
                }
            }
        }

        Ok(removed)
    }

    /// Decide whether an agreed set can be applied on top of `ledger`.
    ///
    /// `ledger` should be a single snapshot for the duration of the call.
    pub fn check_valid(
        &mut self,
        ledger: &dyn LedgerView,
        policy: &dyn PrivilegePolicy,
    ) -> Result<(), HerderError> {
        let lcl = ledger.last_closed_ledger();
        if lcl.hash != *self.previous_ledger_hash() {
            tracing::debug!(
                got = %self.previous_ledger_hash().abbrev(),
                expected = %lcl.hash.abbrev(),
                "bad tx set: previous ledger mismatch"
            );
            return Err(HerderError::PreviousLedgerMismatch {
                expected: lcl.hash,
                actual: *self.previous_ledger_hash(),
            });
        }

        let max = ledger.max_tx_set_size();
        if self.len() > max {
            tracing::debug!(count = self.len(), max, "bad tx set: too many txs");
            return Err(HerderError::TooManyTransactions {
                count: self.len(),
                max,
            });
        }

        self.check_or_trim(ledger, policy, &mut StrictCheck)
            .map(|_| ())
    }

    /// Sort into canonical order, then remove every transaction that would
    /// make the set fail [`check_valid`](Self::check_valid)'s per-account walk.
    pub fn trim_invalid(
        &mut self,
        ledger: &dyn LedgerView,
        policy: &dyn PrivilegePolicy,
    ) -> Result<Vec<TransactionFramePtr>, HerderError> {
        self.sort_for_hash();
        let trimmed = self.check_or_trim(ledger, policy, &mut Trim)?;
        if !trimmed.is_empty() {
            tracing::debug!(
                prev = %self.previous_ledger_hash().abbrev(),
                trimmed = trimmed.len(),
                remaining = self.len(),
                "trimmed invalid transactions"
            );
        }
        Ok(trimmed)
    }
}
