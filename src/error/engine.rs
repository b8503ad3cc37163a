use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the chain engine.
///
/// Engine errors are cloneable since a single failed computation can be observed by every caller
/// that was waiting on it in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The account cannot cover the transaction.
    #[error("not enough balance: required {required}, available {available}")]
    NotEnoughBalance {
        /// Amount plus fees the transaction needs.
        required: Decimal,
        /// Balance available to the transaction.
        available: Decimal,
    },
    /// The recipient could not be resolved on chain.
    #[error("address cannot be resolved: {0}")]
    UnresolvableAddress(String),
    /// The chain could not be reached.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),
    /// The signed operation was rejected.
    #[error("broadcast failed: {0}")]
    BroadcastFailed(String),
    /// The engine does not support the requested operation.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
    /// Any other engine failure.
    #[error("{0}")]
    Other(String),
}

impl EngineError {
    /// Whether this is an insufficient balance condition.
    pub fn is_not_enough_balance(&self) -> bool {
        matches!(self, Self::NotEnoughBalance { .. })
    }
}
