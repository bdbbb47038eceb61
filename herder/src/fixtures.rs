//! Ledger and transaction builders shared by the unit tests.

use lumen_crypto::{account_of, keypair_from_seed, network_id_hash};
use lumen_ledger::LedgerState;
use lumen_store::AccountEntry;
use lumen_transactions::{TransactionBuilder, TransactionFramePtr};
use lumen_types::{
    AccountId, Hash256, KeyPair, LastClosedLedger, LedgerHeader, NetworkId, SequenceNumber,
};

pub(crate) const LCL_HASH: Hash256 = Hash256::new([0xab; 32]);

pub(crate) fn network() -> Hash256 {
    network_id_hash(NetworkId::Dev)
}

pub(crate) fn keypair(seed: u8) -> KeyPair {
    keypair_from_seed(&[seed; 32])
}

pub(crate) fn account(seed: u8) -> AccountId {
    account_of(&keypair(seed))
}

/// Ledger with base fee 100 and the given capacity and reserve.
pub(crate) fn ledger(max_tx_set_size: u32, base_reserve: u32) -> LedgerState {
    LedgerState::new(LastClosedLedger {
        hash: LCL_HASH,
        header: LedgerHeader {
            ledger_seq: 10,
            previous_ledger_hash: Hash256::ZERO,
            base_fee: 100,
            base_reserve,
            max_tx_set_size,
            close_time: 0,
        },
    })
}

pub(crate) fn fund(state: &mut LedgerState, seed: u8, balance: i64, seq_num: SequenceNumber) {
    state.put_account(AccountEntry {
        account_id: account(seed),
        balance,
        seq_num,
        num_sub_entries: 0,
    });
}

/// A signed single-payment transaction from the account seeded with `seed`.
pub(crate) fn tx(seed: u8, seq_num: SequenceNumber, fee: u32) -> TransactionFramePtr {
    let kp = keypair(seed);
    TransactionBuilder::new(account_of(&kp), seq_num)
        .fee(fee)
        .payment(account(200), 1)
        .into_ptr(&network(), &[&kp])
        .expect("fixture transaction encodes")
}
