//! Network parameter types.

use crate::types::Family;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Network info returned by an engine, tagged by chain family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkInfo {
    /// Tezos network parameters.
    Tezos(TezosNetworkInfo),
    /// Parameters of a different chain family, identified by its name.
    Foreign(String),
}

impl NetworkInfo {
    /// Name of the family this info belongs to.
    pub fn family(&self) -> String {
        match self {
            Self::Tezos(_) => Family::Tezos.to_string(),
            Self::Foreign(family) => family.clone(),
        }
    }
}

impl From<TezosNetworkInfo> for NetworkInfo {
    fn from(info: TezosNetworkInfo) -> Self {
        Self::Tezos(info)
    }
}

/// Tezos network parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TezosNetworkInfo {
    /// Default baker fee in mutez.
    pub fees: Decimal,
}

impl TezosNetworkInfo {
    /// Creates network info with the given default fee.
    pub fn new(fees: Decimal) -> Self {
        Self { fees }
    }
}
