//! Fluent construction of signed transactions.

use lumen_types::{AccountId, Hash256, KeyPair, SequenceNumber};

use crate::envelope::{Operation, Transaction, TransactionEnvelope};
use crate::error::TransactionError;
use crate::frame::{TransactionFrame, TransactionFramePtr};

/// Fee per operation used when no explicit fee is set.
pub const DEFAULT_FEE_PER_OPERATION: u32 = 100;

#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    source: AccountId,
    seq_num: SequenceNumber,
    fee: Option<u32>,
    memo: Option<String>,
    operations: Vec<Operation>,
}

impl TransactionBuilder {
    pub fn new(source: AccountId, seq_num: SequenceNumber) -> Self {
        Self {
            source,
            seq_num,
            fee: None,
            memo: None,
            operations: Vec::new(),
        }
    }

    /// Total fee for the transaction. Defaults to
    /// [`DEFAULT_FEE_PER_OPERATION`] per operation (at least one).
    pub fn fee(mut self, fee: u32) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn operation(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    pub fn create_account(self, destination: AccountId, starting_balance: i64) -> Self {
        self.operation(Operation::CreateAccount {
            destination,
            starting_balance,
        })
    }

    pub fn payment(self, destination: AccountId, amount: i64) -> Self {
        self.operation(Operation::Payment {
            destination,
            amount,
        })
    }

    pub fn bump_sequence(self, bump_to: SequenceNumber) -> Self {
        self.operation(Operation::BumpSequence { bump_to })
    }

    pub fn build(self) -> Transaction {
        let ops = self.operations.len().max(1) as u32;
        Transaction {
            source_account: self.source,
            fee: self
                .fee
                .unwrap_or(DEFAULT_FEE_PER_OPERATION.saturating_mul(ops)),
            seq_num: self.seq_num,
            memo: self.memo,
            operations: self.operations,
        }
    }

    /// Build and sign with each of `signers`, in order.
    pub fn sign(
        self,
        network_id: &Hash256,
        signers: &[&KeyPair],
    ) -> Result<TransactionEnvelope, TransactionError> {
        let mut envelope = TransactionEnvelope::new(self.build());
        for signer in signers {
            envelope.sign(network_id, signer)?;
        }
        Ok(envelope)
    }

    pub fn into_frame(
        self,
        network_id: &Hash256,
        signers: &[&KeyPair],
    ) -> Result<TransactionFrame, TransactionError> {
        let envelope = self.sign(network_id, signers)?;
        TransactionFrame::from_envelope(network_id, envelope)
    }

    pub fn into_ptr(
        self,
        network_id: &Hash256,
        signers: &[&KeyPair],
    ) -> Result<TransactionFramePtr, TransactionError> {
        self.into_frame(network_id, signers).map(TransactionFrame::into_ptr)
    }
}
