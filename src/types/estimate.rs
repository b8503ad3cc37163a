use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gas and storage required to deliver value to a recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
    /// Gas limit.
    pub gas_limit: Decimal,
    /// Storage limit in bytes.
    pub storage_limit: Decimal,
}

impl GasEstimate {
    /// Creates an estimate from raw engine units.
    pub fn new(gas_limit: u64, storage_limit: u64) -> Self {
        Self { gas_limit: Decimal::from(gas_limit), storage_limit: Decimal::from(storage_limit) }
    }
}

/// Opaque handle of a signed and broadcast operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastHandle {
    /// Operation hash as reported by the engine.
    pub hash: String,
}
