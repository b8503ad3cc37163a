//! Deterministic engine that prices operations from protocol constants without a node.

use super::{RecipientValidator, TezosEngine};
use crate::{
    config::OfflineConfig,
    constants::{MINIMAL_FEE_MUTEZ, MINIMAL_NANOTEZ_PER_BYTE, MINIMAL_NANOTEZ_PER_GAS_UNIT},
    error::{EngineError, RecipientError, RecipientValidation, RecipientWarning},
    types::{
        Account, BroadcastHandle, Family, GasEstimate, NetworkInfo, TezosNetworkInfo, Transaction,
    },
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Base58 alphabet used by Tezos addresses.
const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of a base58check encoded Tezos address.
const ADDRESS_LENGTH: usize = 36;

/// Kind of a Tezos address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// `tz1`, `tz2` or `tz3` account controlled by a key.
    Implicit,
    /// `KT1` originated contract.
    Contract,
}

impl AddressKind {
    /// Classifies a syntactically well formed address, `None` otherwise.
    ///
    /// Only prefix, length and alphabet are checked, not the checksum.
    pub fn parse(address: &str) -> Option<Self> {
        if address.len() != ADDRESS_LENGTH
            || !address.chars().all(|c| BASE58_ALPHABET.contains(c))
        {
            return None;
        }

        match &address[..3] {
            "tz1" | "tz2" | "tz3" => Some(Self::Implicit),
            "KT1" => Some(Self::Contract),
            _ => None,
        }
    }
}

/// A [`TezosEngine`] computing estimates from [`OfflineConfig`].
///
/// Useful for dry runs: network info, gas, storage and fees follow the default mempool filter, but
/// nothing can be broadcast.
#[derive(Debug, Clone, Default)]
pub struct OfflineEngine {
    config: OfflineConfig,
}

impl OfflineEngine {
    /// Creates a new offline engine.
    pub fn new(config: OfflineConfig) -> Self {
        Self { config }
    }

    /// Minimal baker fee in mutez of a transfer consuming `gas_limit`.
    pub fn minimal_fee(&self, gas_limit: Decimal) -> Decimal {
        let nanotez = gas_limit * Decimal::from(MINIMAL_NANOTEZ_PER_GAS_UNIT)
            + Decimal::from(self.config.operation_size * MINIMAL_NANOTEZ_PER_BYTE);
        Decimal::from(MINIMAL_FEE_MUTEZ) + (nanotez / Decimal::from(1_000)).ceil()
    }

    /// Default fee advertised as network info.
    pub fn default_fee(&self) -> Decimal {
        self.config
            .default_fee
            .unwrap_or_else(|| self.minimal_fee(Decimal::from(self.config.implicit_gas_limit)))
    }
}

#[async_trait]
impl TezosEngine for OfflineEngine {
    async fn fetch_network_info(&self, _account: &Account) -> Result<NetworkInfo, EngineError> {
        Ok(TezosNetworkInfo::new(self.default_fee()).into())
    }

    async fn estimate_gas_and_storage(
        &self,
        _account: &Account,
        address: &str,
    ) -> Result<GasEstimate, EngineError> {
        match AddressKind::parse(address) {
            Some(AddressKind::Implicit) => Ok(GasEstimate::new(self.config.implicit_gas_limit, 0)),
            Some(AddressKind::Contract) => Ok(GasEstimate::new(
                self.config.contract_gas_limit,
                self.config.contract_storage_limit,
            )),
            None => Err(EngineError::UnresolvableAddress(address.to_string())),
        }
    }

    #[instrument(skip_all, fields(account = %account.id))]
    async fn price_transaction(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<Decimal, EngineError> {
        let gas_limit =
            transaction.gas_limit.unwrap_or_else(|| Decimal::from(self.config.implicit_gas_limit));
        let storage_limit = transaction.storage_limit.unwrap_or_default();
        let baker_fee = transaction.fees.unwrap_or_else(|| self.minimal_fee(gas_limit));
        let fees = baker_fee + storage_limit * Decimal::from(self.config.storage_burn_per_byte);
        debug!(%baker_fee, %fees, "Priced transaction");

        // fees are always paid from the parent account
        let not_enough =
            |required, available| EngineError::NotEnoughBalance { required, available };
        match transaction.sub_account_id.as_deref() {
            Some(id) => {
                let sub_account = account
                    .sub_account(id)
                    .ok_or_else(|| EngineError::Other(format!("unknown sub-account {id}")))?;
                if !transaction.use_all_amount && transaction.amount > sub_account.balance {
                    return Err(not_enough(transaction.amount, sub_account.balance));
                }
                if fees > account.balance {
                    return Err(not_enough(fees, account.balance));
                }
            }
            None if transaction.use_all_amount => {
                if fees >= account.balance {
                    return Err(not_enough(fees, account.balance));
                }
            }
            None => {
                let required = transaction.amount + fees;
                if required > account.balance {
                    return Err(not_enough(required, account.balance));
                }
            }
        }

        Ok(fees)
    }

    async fn sign_and_broadcast(
        &self,
        _account: &Account,
        _transaction: &Transaction,
        _device_id: &str,
    ) -> Result<BroadcastHandle, EngineError> {
        Err(EngineError::Unsupported("the offline engine cannot broadcast"))
    }
}

/// A [`RecipientValidator`] checking address prefix, length and alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixValidator;

#[async_trait]
impl RecipientValidator for PrefixValidator {
    async fn validate_recipient(&self, currency: &str, address: &str) -> RecipientValidation {
        if address.is_empty() {
            return RecipientValidation::error(RecipientError::RecipientRequired);
        }

        let invalid = || {
            RecipientValidation::error(RecipientError::InvalidAddress {
                currency: currency.to_string(),
                address: address.to_string(),
            })
        };
        if currency != Family::Tezos.to_string() {
            return invalid();
        }

        match AddressKind::parse(address) {
            Some(AddressKind::Implicit) => RecipientValidation::valid(),
            Some(AddressKind::Contract) => RecipientValidation::warning(
                RecipientWarning::ContractRecipient(address.to_string()),
            ),
            None => invalid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubAccount;

    const IMPLICIT: &str = "tz1VSUr8wwNhLAzempoch5d6hLRiTh8Cjcjb";
    const CONTRACT: &str = "KT1PWx2mnDueood7fEmfbBDKx1D9BAnnXitn";

    fn account(balance: u64) -> Account {
        Account {
            id: "acc".into(),
            currency: "tezos".into(),
            balance: Decimal::from(balance),
            fresh_address: IMPLICIT.into(),
            sub_accounts: vec![SubAccount { id: "token".into(), balance: Decimal::from(10) }],
        }
    }

    #[test]
    fn address_kinds() {
        assert_eq!(AddressKind::parse(IMPLICIT), Some(AddressKind::Implicit));
        assert_eq!(AddressKind::parse(CONTRACT), Some(AddressKind::Contract));
        assert_eq!(AddressKind::parse("tz4VSUr8wwNhLAzempoch5d6hLRiTh8Cjcjb"), None);
        assert_eq!(AddressKind::parse("tz1VSUr8wwNhLAzempoch5d6hLRiTh8Cjcj0"), None);
        assert_eq!(AddressKind::parse("tz1"), None);
    }

    #[test]
    fn minimal_fee_of_implicit_transfer() {
        let engine = OfflineEngine::default();
        // 100 mutez + 1420 gas * 100 nanotez + 160 bytes * 1000 nanotez
        assert_eq!(engine.default_fee(), Decimal::from(402));
    }

    #[tokio::test]
    async fn gas_estimates_by_address_kind() {
        let engine = OfflineEngine::default();
        let account = account(1_000);

        let implicit = engine.estimate_gas_and_storage(&account, IMPLICIT).await.unwrap();
        assert_eq!(implicit, GasEstimate::new(1_420, 0));

        let contract = engine.estimate_gas_and_storage(&account, CONTRACT).await.unwrap();
        assert_eq!(contract, GasEstimate::new(10_600, 300));

        let err = engine.estimate_gas_and_storage(&account, "nope").await.unwrap_err();
        assert_eq!(err, EngineError::UnresolvableAddress("nope".into()));
    }

    #[tokio::test]
    async fn pricing_adds_storage_burn() {
        let engine = OfflineEngine::default();
        let tx = Transaction {
            amount: Decimal::from(100),
            fees: Some(Decimal::from(500)),
            storage_limit: Some(Decimal::from(2)),
            recipient: CONTRACT.into(),
            ..Default::default()
        };

        let fees = engine.price_transaction(&account(10_000), &tx).await.unwrap();
        assert_eq!(fees, Decimal::from(1_000));
    }

    #[tokio::test]
    async fn pricing_checks_balance() {
        let engine = OfflineEngine::default();
        let tx = Transaction {
            amount: Decimal::from(700),
            fees: Some(Decimal::from(402)),
            ..Default::default()
        };

        let err = engine.price_transaction(&account(1_000), &tx).await.unwrap_err();
        assert!(err.is_not_enough_balance());

        let all = Transaction { use_all_amount: true, ..tx.clone() };
        assert_eq!(engine.price_transaction(&account(1_000), &all).await, Ok(Decimal::from(402)));
        let err = engine.price_transaction(&account(402), &all).await.unwrap_err();
        assert!(err.is_not_enough_balance());

        let token =
            Transaction { sub_account_id: Some("token".into()), amount: Decimal::from(11), ..tx };
        assert_eq!(
            engine.price_transaction(&account(1_000), &token).await,
            Err(EngineError::NotEnoughBalance {
                required: Decimal::from(11),
                available: Decimal::from(10)
            })
        );
    }

    #[tokio::test]
    async fn broadcast_is_unsupported() {
        let engine = OfflineEngine::default();
        let tx = Transaction::default();
        let err = engine.sign_and_broadcast(&account(1), &tx, "dev").await.unwrap_err();
        assert!(matches!(err, EngineError::Unsupported(_)));
    }

    #[tokio::test]
    async fn prefix_validation() {
        let validator = PrefixValidator;

        assert_eq!(
            validator.validate_recipient("tezos", "").await,
            RecipientValidation::error(RecipientError::RecipientRequired)
        );
        assert!(validator.validate_recipient("tezos", IMPLICIT).await.is_valid());

        let contract = validator.validate_recipient("tezos", CONTRACT).await;
        assert!(contract.is_valid());
        assert_eq!(contract.warning, Some(RecipientWarning::ContractRecipient(CONTRACT.into())));

        assert!(!validator.validate_recipient("tezos", "0xdeadbeef").await.is_valid());
        assert!(!validator.validate_recipient("bitcoin", IMPLICIT).await.is_valid());
    }
}
