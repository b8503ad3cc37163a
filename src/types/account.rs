//! Account snapshot types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A read-only snapshot of a Tezos account as provided by the surrounding wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier.
    pub id: String,
    /// Currency identifier, e.g. `tezos`.
    pub currency: String,
    /// Native balance in mutez.
    pub balance: Decimal,
    /// Address that can be used as a default recipient for internal transfers.
    pub fresh_address: String,
    /// Sub-accounts sharing this account's signing identity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_accounts: Vec<SubAccount>,
}

impl Account {
    /// Returns the sub-account with the given id, if any.
    pub fn sub_account(&self, id: &str) -> Option<&SubAccount> {
        self.sub_accounts.iter().find(|sub| sub.id == id)
    }

    /// Returns the balance of the targeted account.
    ///
    /// With a sub-account id this is the sub-account balance, `None` if the id is unknown.
    pub fn balance_of(&self, sub_account_id: Option<&str>) -> Option<Decimal> {
        match sub_account_id {
            Some(id) => self.sub_account(id).map(|sub| sub.balance),
            None => Some(self.balance),
        }
    }
}

/// A logical sub-ledger of an [`Account`], e.g. a token balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccount {
    /// Sub-account identifier.
    pub id: String,
    /// Balance of the sub-account.
    pub balance: Decimal,
}
