//! Genesis ledger state: the first ledger on each network.
//!
//! The genesis ledger holds a single root account funded with the entire
//! supply. The root key is derived from the network passphrase, so every node
//! on a network derives the same genesis state and hash.

use lumen_crypto::{account_of, keypair_from_seed, network_id_hash};
use lumen_store::AccountEntry;
use lumen_types::{Hash256, KeyPair, LastClosedLedger, LedgerHeader, NetworkId};

use crate::manager::header_hash;
use crate::snapshot::LedgerState;

/// Total supply in stroops held by the root account at genesis.
pub const GENESIS_TOTAL_COINS: i64 = 1_000_000_000_000_000_000;

const GENESIS_BASE_FEE: u32 = 100;
const GENESIS_BASE_RESERVE: u32 = 5_000_000;
const GENESIS_MAX_TX_SET_SIZE: u32 = 100;

/// Key pair of the root account, seeded from the network id.
pub fn root_keypair(network: NetworkId) -> KeyPair {
    keypair_from_seed(network_id_hash(network).as_bytes())
}

/// Build the genesis ledger state for a network.
pub fn genesis_state(network: NetworkId) -> LedgerState {
    let header = LedgerHeader {
        ledger_seq: 1,
        previous_ledger_hash: Hash256::ZERO,
        base_fee: GENESIS_BASE_FEE,
        base_reserve: GENESIS_BASE_RESERVE,
        max_tx_set_size: GENESIS_MAX_TX_SET_SIZE,
        close_time: 0,
    };
    let hash = header_hash(&header, &network_id_hash(network))
        .expect("LedgerHeader is always serializable");

    let mut state = LedgerState::new(LastClosedLedger { hash, header });
    state.put_account(AccountEntry {
        account_id: account_of(&root_keypair(network)),
        balance: GENESIS_TOTAL_COINS,
        seq_num: 0,
        num_sub_entries: 0,
    });
    state
}
