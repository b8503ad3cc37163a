//! Chain engine and recipient validation collaborators.
//!
//! The bridge never builds, signs or broadcasts wire-level operations itself. Everything that needs
//! the chain goes through a [`TezosEngine`] and every address check goes through a
//! [`RecipientValidator`].

mod offline;
pub use offline::{AddressKind, OfflineEngine, PrefixValidator};

use crate::{
    error::{EngineError, RecipientValidation},
    types::{Account, BroadcastHandle, GasEstimate, NetworkInfo, Transaction},
};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Engine building, pricing, signing and broadcasting Tezos operations.
#[async_trait]
pub trait TezosEngine: Send + Sync + std::fmt::Debug {
    /// Fetches the current network parameters for the account's chain.
    ///
    /// Fails if the chain is unreachable.
    async fn fetch_network_info(&self, account: &Account) -> Result<NetworkInfo, EngineError>;

    /// Estimates the gas and storage needed to deliver value from `account` to `address`.
    ///
    /// Fails if the address cannot be resolved.
    async fn estimate_gas_and_storage(
        &self,
        account: &Account,
        address: &str,
    ) -> Result<GasEstimate, EngineError>;

    /// Prices the total network fee of `transaction`, honoring explicit gas, storage and fee
    /// overrides.
    ///
    /// Fails with [`EngineError::NotEnoughBalance`] when the account cannot cover it.
    async fn price_transaction(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<Decimal, EngineError>;

    /// Signs `transaction` on the given device and submits it to the network.
    async fn sign_and_broadcast(
        &self,
        account: &Account,
        transaction: &Transaction,
        device_id: &str,
    ) -> Result<BroadcastHandle, EngineError>;
}

/// Classifies recipient addresses.
#[async_trait]
pub trait RecipientValidator: Send + Sync + std::fmt::Debug {
    /// Validates `address` for `currency`.
    ///
    /// A merely invalid address is reported in the returned validation, never as a failure.
    async fn validate_recipient(&self, currency: &str, address: &str) -> RecipientValidation;
}
