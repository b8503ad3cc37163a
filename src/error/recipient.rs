use thiserror::Error;

/// Hard recipient validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipientError {
    /// No recipient was provided.
    #[error("recipient is required")]
    RecipientRequired,
    /// The recipient is not a valid address for the currency.
    #[error("invalid {currency} address: {address}")]
    InvalidAddress {
        /// Currency the address was validated for.
        currency: String,
        /// The rejected address.
        address: String,
    },
}

/// Soft recipient concerns that do not block submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipientWarning {
    /// The recipient is an originated contract.
    #[error("recipient {0} is a smart contract")]
    ContractRecipient(String),
}

/// Outcome of a recipient validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientValidation {
    /// Error blocking the use of this recipient.
    pub error: Option<RecipientError>,
    /// Advisory concern about this recipient.
    pub warning: Option<RecipientWarning>,
}

impl RecipientValidation {
    /// A validation without findings.
    pub fn valid() -> Self {
        Self::default()
    }

    /// A validation failing with `error`.
    pub fn error(error: RecipientError) -> Self {
        Self { error: Some(error), warning: None }
    }

    /// A validation passing with `warning`.
    pub fn warning(warning: RecipientWarning) -> Self {
        Self { error: None, warning: Some(warning) }
    }

    /// Whether the recipient may be used.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}
