//! Privileged-account policy.
//!
//! Privileged (whitelisted) accounts pay no fees inside a transaction set and
//! are not ranked by fee ratio during surge pricing. A slice of capacity is
//! still reserved for ordinary transactions so they cannot be starved.

use std::collections::BTreeSet;

use lumen_types::AccountId;

use crate::config::WhitelistConfig;

/// The query interface the transaction-set engine needs from an allowlist.
pub trait PrivilegePolicy {
    fn is_privileged(&self, account: &AccountId) -> bool;

    /// Capacity guaranteed to non-privileged transactions in a set of `max`.
    fn unprivileged_reserve(&self, max: usize) -> usize;

    /// The account whose transactions sort ahead of every other privileged
    /// transaction, if any.
    fn distinguished_account(&self) -> Option<&AccountId>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Whitelist {
    holder: Option<AccountId>,
    accounts: BTreeSet<AccountId>,
    reserve_percent: u32,
}

impl Whitelist {
    /// No privileged accounts; all capacity goes to ordinary transactions.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn new(
        holder: Option<AccountId>,
        accounts: impl IntoIterator<Item = AccountId>,
        reserve_percent: u32,
    ) -> Self {
        Self {
            holder,
            accounts: accounts.into_iter().collect(),
            reserve_percent,
        }
    }

    pub fn from_config(config: &WhitelistConfig) -> Self {
        Self::new(
            config.holder,
            config.accounts.iter().copied(),
            config.reserve_percent,
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.holder.is_some() || !self.accounts.is_empty()
    }

    pub fn len(&self) -> usize {
        let holder_only = self.holder.is_some_and(|h| !self.accounts.contains(&h));
        self.accounts.len() + usize::from(holder_only)
    }

    pub fn is_empty(&self) -> bool {
        !self.is_enabled()
    }
}

impl PrivilegePolicy for Whitelist {
    fn is_privileged(&self, account: &AccountId) -> bool {
        self.holder.as_ref() == Some(account) || self.accounts.contains(account)
    }

    fn unprivileged_reserve(&self, max: usize) -> usize {
        if !self.is_enabled() {
            return max;
        }
        let pct = self.reserve_percent.min(100) as usize;
        (max.saturating_mul(pct) / 100).max(1).min(max)
    }

    fn distinguished_account(&self) -> Option<&AccountId> {
        self.holder.as_ref()
    }
}
