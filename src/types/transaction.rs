//! Draft transaction types.

use crate::types::TezosNetworkInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Chain family a draft belongs to.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Tezos.
    #[default]
    Tezos,
}

/// Operation kind of a draft.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Plain transfer.
    #[default]
    Send,
    /// Delegation to a baker.
    Delegate,
    /// Withdrawal of the current delegation.
    Undelegate,
}

/// A draft transaction, i.e. user intent prior to signing.
///
/// Drafts are values: they are replaced as a whole by
/// [`update_transaction`](crate::transactions::update_transaction) and never mutated in place, so
/// that callers can detect a prepared draft reaching its fixed point by comparing it to its input.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    /// Family tag, always [`Family::Tezos`].
    pub family: Family,
    /// Operation kind.
    pub mode: Mode,
    /// Amount to send. Ignored when [`Self::use_all_amount`] is set.
    pub amount: Decimal,
    /// Baker fee, user or system supplied.
    pub fees: Option<Decimal>,
    /// Gas limit.
    pub gas_limit: Option<Decimal>,
    /// Storage limit.
    pub storage_limit: Option<Decimal>,
    /// Recipient address, possibly empty.
    pub recipient: String,
    /// Network parameters resolved during preparation.
    pub network_info: Option<TezosNetworkInfo>,
    /// Sub-account this draft spends from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_account_id: Option<String>,
    /// Spend the full balance of the targeted account.
    pub use_all_amount: bool,
}

/// A set of field replacements for a [`Transaction`].
///
/// Fields left as `None` are preserved. Nullable draft fields take an `Option` so that a patch can
/// also reset them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionPatch {
    pub(crate) mode: Option<Mode>,
    pub(crate) amount: Option<Decimal>,
    pub(crate) fees: Option<Option<Decimal>>,
    pub(crate) gas_limit: Option<Option<Decimal>>,
    pub(crate) storage_limit: Option<Option<Decimal>>,
    pub(crate) recipient: Option<String>,
    pub(crate) network_info: Option<Option<TezosNetworkInfo>>,
    pub(crate) sub_account_id: Option<Option<String>>,
    pub(crate) use_all_amount: Option<bool>,
}

impl TransactionPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation kind.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets or clears the fee.
    pub fn fees(mut self, fees: Option<Decimal>) -> Self {
        self.fees = Some(fees);
        self
    }

    /// Sets or clears the gas limit.
    pub fn gas_limit(mut self, gas_limit: Option<Decimal>) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Sets or clears the storage limit.
    pub fn storage_limit(mut self, storage_limit: Option<Decimal>) -> Self {
        self.storage_limit = Some(storage_limit);
        self
    }

    /// Sets the recipient.
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Sets or clears the resolved network info.
    pub fn network_info(mut self, network_info: Option<TezosNetworkInfo>) -> Self {
        self.network_info = Some(network_info);
        self
    }

    /// Sets or clears the targeted sub-account.
    pub fn sub_account_id(mut self, sub_account_id: Option<String>) -> Self {
        self.sub_account_id = Some(sub_account_id);
        self
    }

    /// Toggles all-balance mode.
    pub fn use_all_amount(mut self, use_all_amount: bool) -> Self {
        self.use_all_amount = Some(use_all_amount);
        self
    }

    /// Whether the patch replaces no field at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
