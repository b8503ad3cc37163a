//! Bridge error types.
use thiserror::Error;

mod engine;
pub use engine::EngineError;

mod recipient;
pub use recipient::{RecipientError, RecipientValidation, RecipientWarning};

mod status;
pub use status::{StatusError, StatusWarning};

/// The overarching error type returned by fallible bridge operations.
///
/// Validation problems are never returned through this type, they are reported in a
/// [`TransactionStatus`](crate::types::TransactionStatus) instead.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The engine failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// Pricing the transaction failed.
    #[error(transparent)]
    Fee(#[from] FeeError),
    /// An internal error occurred.
    #[error(transparent)]
    InternalError(#[from] eyre::Error),
}

/// Errors returned by the fee calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// The recipient was rejected before pricing.
    #[error(transparent)]
    Recipient(#[from] RecipientError),
    /// The engine failed to price the transaction.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl FeeError {
    /// Whether pricing failed because the account cannot cover the transaction.
    pub fn is_not_enough_balance(&self) -> bool {
        matches!(self, Self::Engine(err) if err.is_not_enough_balance())
    }
}
