//! The Tezos account bridge.

use crate::{
    cache::CacheStats,
    config::{BridgeConfig, CacheConfig},
    engine::{OfflineEngine, PrefixValidator, RecipientValidator, TezosEngine},
    estimation::{FeeCalculator, GasEstimator},
    transactions::{create_transaction, update_transaction},
    types::{Transaction, TransactionPatch},
};
use std::sync::Arc;

/// Entry point for preparing, evaluating and broadcasting Tezos transactions.
///
/// Cloning the bridge is cheap and clones share the estimation caches.
#[derive(Debug, Clone)]
pub struct TezosBridge {
    pub(crate) engine: Arc<dyn TezosEngine>,
    pub(crate) validator: Arc<dyn RecipientValidator>,
    pub(crate) gas_estimator: GasEstimator,
    pub(crate) fee_calculator: FeeCalculator,
}

impl TezosBridge {
    /// Creates a bridge on top of the given engine and recipient validator.
    pub fn new(
        engine: Arc<dyn TezosEngine>,
        validator: Arc<dyn RecipientValidator>,
        config: &CacheConfig,
    ) -> Self {
        Self {
            gas_estimator: GasEstimator::new(engine.clone(), &config.gas),
            fee_calculator: FeeCalculator::new(engine.clone(), validator.clone(), &config.fees),
            engine,
            validator,
        }
    }

    /// Creates a bridge backed by an [`OfflineEngine`] and a [`PrefixValidator`].
    pub fn offline(config: &BridgeConfig) -> Self {
        Self::new(
            Arc::new(OfflineEngine::new(config.offline.clone())),
            Arc::new(PrefixValidator),
            &config.cache,
        )
    }

    /// Creates an empty draft.
    pub fn create_transaction(&self) -> Transaction {
        create_transaction()
    }

    /// Returns `transaction` with the fields of `patch` replaced.
    pub fn update_transaction(
        &self,
        transaction: &Transaction,
        patch: TransactionPatch,
    ) -> Transaction {
        update_transaction(transaction, patch)
    }

    /// The gas and storage estimator.
    pub fn gas_estimator(&self) -> &GasEstimator {
        &self.gas_estimator
    }

    /// The fee calculator.
    pub fn fee_calculator(&self) -> &FeeCalculator {
        &self.fee_calculator
    }

    /// Get cache statistics for monitoring.
    pub async fn cache_stats(&self) -> CacheStats {
        let gas = self.gas_estimator.cache();
        let fees = self.fee_calculator.cache();
        gas.sync().await;
        fees.sync().await;

        CacheStats { gas_cache_size: gas.entry_count(), fee_cache_size: fees.entry_count() }
    }
}
