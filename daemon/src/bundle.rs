//! JSON bundles: a ledger state plus candidate transactions.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use lumen_crypto::{account_of, keypair_from_seed};
use lumen_herder::{HerderError, TxSetFrame};
use lumen_ledger::{genesis_state, root_keypair, LedgerState};
use lumen_store::{AccountEntry, LedgerView};
use lumen_transactions::{TransactionBuilder, TransactionEnvelope, TransactionFrame};
use lumen_types::{Hash256, NetworkId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub ledger: LedgerState,
    /// Defaults to the hash of the ledger's last closed ledger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_ledger_hash: Option<Hash256>,
    #[serde(default)]
    pub transactions: Vec<TransactionEnvelope>,
}

impl Bundle {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading bundle {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing bundle {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("writing bundle {}", path.display()))
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn tx_set(&self, network_id: &Hash256) -> Result<TxSetFrame, HerderError> {
        let previous = self
            .previous_ledger_hash
            .unwrap_or(self.ledger.last_closed_ledger().hash);
        let mut set = TxSetFrame::new(previous);
        for envelope in &self.transactions {
            let frame = TransactionFrame::from_envelope(network_id, envelope.clone())?;
            set.add_transaction(frame.into_ptr());
        }
        Ok(set)
    }

    /// Replace the transactions with the set's current contents.
    pub fn with_tx_set(mut self, set: &TxSetFrame) -> Self {
        let wire = set.to_wire();
        self.previous_ledger_hash = Some(wire.previous_ledger_hash);
        self.transactions = wire.txs;
        self
    }

    /// A small demonstration bundle on `network`: a few funded accounts with
    /// a mix of valid transactions, a sequence gap and an account that can't
    /// cover its fees.
    pub fn sample(network: NetworkId) -> anyhow::Result<Self> {
        let network_id = lumen_crypto::network_id_hash(network);
        let mut ledger = genesis_state(network);
        let reserve = ledger.last_closed.header.minimum_balance(0);

        let funded = [(1u8, 10_000_000), (2, 10_000_000), (3, 150)];
        for (seed, spare) in funded {
            ledger.put_account(AccountEntry {
                account_id: account_of(&keypair_from_seed(&[seed; 32])),
                balance: reserve + spare,
                seq_num: 0,
                num_sub_entries: 0,
            });
        }

        let kp = |seed: u8| keypair_from_seed(&[seed; 32]);
        let root = root_keypair(network);
        let newcomer = account_of(&kp(4));

        let txs = [
            TransactionBuilder::new(account_of(&kp(1)), 1)
                .payment(account_of(&kp(2)), 500)
                .sign(&network_id, &[&kp(1)])?,
            TransactionBuilder::new(account_of(&kp(1)), 2)
                .fee(300)
                .memo("second")
                .payment(account_of(&kp(3)), 25)
                .sign(&network_id, &[&kp(1)])?,
            TransactionBuilder::new(account_of(&kp(2)), 1)
                .fee(250)
                .bump_sequence(5)
                .sign(&network_id, &[&kp(2)])?,
            // Gap: sequence 2 is missing.
            TransactionBuilder::new(account_of(&kp(2)), 3)
                .payment(account_of(&kp(1)), 1)
                .sign(&network_id, &[&kp(2)])?,
            // Two fees of 100 against 150 spare.
            TransactionBuilder::new(account_of(&kp(3)), 1)
                .payment(account_of(&kp(1)), 1)
                .sign(&network_id, &[&kp(3)])?,
            TransactionBuilder::new(account_of(&kp(3)), 2)
                .payment(account_of(&kp(1)), 1)
                .sign(&network_id, &[&kp(3)])?,
            TransactionBuilder::new(account_of(&root), 1)
                .create_account(newcomer, reserve * 10)
                .sign(&network_id, &[&root])?,
        ];

        Ok(Self {
            ledger,
            previous_ledger_hash: None,
            transactions: txs.into(),
        })
    }
}
