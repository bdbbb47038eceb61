//! Transaction validation logic.

use lumen_crypto::verify_signature;
use lumen_store::{LedgerView, StoreError};
use lumen_types::{AccountId, SequenceNumber};

use crate::envelope::Operation;
use crate::error::TxValidationError;
use crate::frame::TransactionFrame;

/// Validate the structure of a single operation.
///
/// Stateless: balances and destination existence are checked when the
/// transaction is applied.
pub fn validate_operation(
    source: &AccountId,
    index: usize,
    op: &Operation,
) -> Result<(), TxValidationError> {
    let malformed = |reason: &str| TxValidationError::MalformedOperation {
        index,
        reason: reason.to_string(),
    };
    match op {
        Operation::CreateAccount {
            destination,
            starting_balance,
        } => {
            if *starting_balance <= 0 {
                return Err(malformed("starting balance must be positive"));
            }
            if destination == source {
                return Err(malformed("account cannot create itself"));
            }
        }
        Operation::Payment { amount, .. } => {
            if *amount <= 0 {
                return Err(malformed("payment amount must be positive"));
            }
        }
        Operation::BumpSequence { bump_to } => {
            if *bump_to < 0 {
                return Err(malformed("cannot bump to a negative sequence"));
            }
        }
    }
    Ok(())
}

/// Check that `frame` could be applied on top of `ledger`.
///
/// `last_seq` is the sequence number of the previous transaction from the
/// same source account within the set being checked, or 0 to use the
/// account's sequence number in the ledger. A `fee_exempt` transaction is
/// not held to the ledger's minimum fee.
pub fn check_valid(
    frame: &TransactionFrame,
    ledger: &dyn LedgerView,
    last_seq: SequenceNumber,
    fee_exempt: bool,
) -> Result<(), TxValidationError> {
    let tx = &frame.envelope().tx;
    if tx.operations.is_empty() {
        return Err(TxValidationError::MissingOperation);
    }
    for (index, op) in tx.operations.iter().enumerate() {
        validate_operation(&tx.source_account, index, op)?;
    }

    let min_fee = frame.min_fee(ledger);
    if !fee_exempt && frame.fee() < min_fee {
        return Err(TxValidationError::InsufficientFee {
            fee: frame.fee(),
            min_fee,
        });
    }

    let account = ledger
        .load_account(&tx.source_account)
        .map_err(|e| match e {
            StoreError::NotFound(_) => TxValidationError::NoAccount(tx.source_account),
            other => TxValidationError::Store(other),
        })?;

    let current = if last_seq == 0 {
        account.seq_num
    } else {
        last_seq
    };
    let expected = current.saturating_add(1);
    if current == SequenceNumber::MAX || tx.seq_num != expected {
        return Err(TxValidationError::BadSeq {
            expected,
            actual: tx.seq_num,
        });
    }

    let source_key = tx.source_account.public_key();
    let hint = source_key.hint();
    let signed = frame.envelope().signatures.iter().any(|sig| {
        sig.hint == hint
            && verify_signature(frame.contents_hash().as_bytes(), &sig.signature, &source_key)
    });
    if !signed {
        return Err(TxValidationError::BadAuth);
    }

    Ok(())
}
