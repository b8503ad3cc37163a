use super::{FeeError, RecipientError, RecipientWarning};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors reported in a [`TransactionStatus`](crate::types::TransactionStatus).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The draft carries no fee yet.
    #[error("fees not loaded")]
    FeeNotLoaded,
    /// Pricing the transaction failed.
    #[error(transparent)]
    Fee(#[from] FeeError),
    /// The recipient was rejected.
    #[error(transparent)]
    Recipient(#[from] RecipientError),
    /// Amount and fees add up to more than can be represented.
    #[error("amount is out of range")]
    AmountOverflow,
    /// The draft targets a sub-account the account does not have.
    #[error("unknown sub-account {0}")]
    UnknownSubAccount(String),
}

/// Warnings reported in a [`TransactionStatus`](crate::types::TransactionStatus).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusWarning {
    /// Fees exceed a tenth of the amount sent.
    #[error("fees {fees} are high compared to amount {amount}")]
    FeeTooHigh {
        /// Estimated fees.
        fees: Decimal,
        /// Final amount.
        amount: Decimal,
    },
    /// Soft concern about the recipient.
    #[error(transparent)]
    Recipient(#[from] RecipientWarning),
}
