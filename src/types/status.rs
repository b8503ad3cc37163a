//! Transaction status report.

use crate::error::{StatusError, StatusWarning};
use rust_decimal::Decimal;
use serde::Serialize;

/// Validation outcome and derived totals of a draft, recomputed on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatus {
    /// Errors blocking submission.
    pub errors: StatusErrors,
    /// Advisory warnings.
    pub warnings: StatusWarnings,
    /// Estimated network fees, zero when they could not be estimated.
    pub estimated_fees: Decimal,
    /// Final amount that will be received.
    pub amount: Decimal,
    /// Total amount leaving the account.
    pub total_spent: Decimal,
    /// Whether the recipient is implied and must not be edited.
    pub recipient_is_read_only: bool,
}

impl TransactionStatus {
    /// Whether the draft may be signed and broadcast.
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Errors keyed by the field they are attributed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusErrors {
    /// Fees are missing.
    #[serde(with = "crate::serde::display", skip_serializing_if = "Option::is_none")]
    pub fees: Option<StatusError>,
    /// The amount cannot be covered.
    #[serde(with = "crate::serde::display", skip_serializing_if = "Option::is_none")]
    pub amount: Option<StatusError>,
    /// Any other failure while estimating the transaction.
    #[serde(with = "crate::serde::display", skip_serializing_if = "Option::is_none")]
    pub transaction: Option<StatusError>,
    /// The recipient is invalid.
    #[serde(with = "crate::serde::display", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<StatusError>,
}

impl StatusErrors {
    /// Whether no error is recorded.
    pub fn is_empty(&self) -> bool {
        self.fees.is_none()
            && self.amount.is_none()
            && self.transaction.is_none()
            && self.recipient.is_none()
    }
}

/// Warnings keyed by the concern they relate to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusWarnings {
    /// Fees are disproportionate to the amount.
    #[serde(with = "crate::serde::display", skip_serializing_if = "Option::is_none")]
    pub fee_too_high: Option<StatusWarning>,
    /// Soft concern about the recipient.
    #[serde(with = "crate::serde::display", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<StatusWarning>,
}

impl StatusWarnings {
    /// Whether no warning is recorded.
    pub fn is_empty(&self) -> bool {
        self.fee_too_high.is_none() && self.recipient.is_none()
    }
}
