use crate::{
    cache::BridgeCache,
    config::CacheSettings,
    engine::TezosEngine,
    error::EngineError,
    types::{Account, GasEstimate},
};
use std::sync::Arc;
use tracing::instrument;

/// Gas and storage estimator for transfers to a resolved recipient.
#[derive(Debug, Clone)]
pub struct GasEstimator {
    engine: Arc<dyn TezosEngine>,
    cache: BridgeCache<GasEstimate>,
}

impl GasEstimator {
    /// Creates a new estimator caching results according to `settings`.
    pub fn new(engine: Arc<dyn TezosEngine>, settings: &CacheSettings) -> Self {
        Self { engine, cache: BridgeCache::from_settings("gas_estimate", settings) }
    }

    /// Cache key of an estimate: the account id and the recipient address.
    pub fn cache_key(account: &Account, address: &str) -> String {
        format!("{}|{}", account.id, address)
    }

    /// Estimates the gas and storage limits to deliver value from `account` to `address`.
    ///
    /// `address` must already be validated. Engine failures are returned as is.
    #[instrument(skip_all, fields(account = %account.id, %address))]
    pub async fn estimate(
        &self,
        account: &Account,
        address: &str,
    ) -> Result<GasEstimate, EngineError> {
        self.cache
            .get_or_fetch(Self::cache_key(account, address), move || {
                self.engine.estimate_gas_and_storage(account, address)
            })
            .await
    }

    /// The underlying cache.
    pub fn cache(&self) -> &BridgeCache<GasEstimate> {
        &self.cache
    }
}
