use crate::{
    cache::BridgeCache,
    config::CacheSettings,
    engine::{RecipientValidator, TezosEngine},
    error::FeeError,
    types::{Account, Transaction},
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Calculates the total network fee of a draft.
#[derive(Debug, Clone)]
pub struct FeeCalculator {
    engine: Arc<dyn TezosEngine>,
    validator: Arc<dyn RecipientValidator>,
    cache: BridgeCache<Decimal>,
}

impl FeeCalculator {
    /// Creates a new fee calculator caching results according to `settings`.
    pub fn new(
        engine: Arc<dyn TezosEngine>,
        validator: Arc<dyn RecipientValidator>,
        settings: &CacheSettings,
    ) -> Self {
        Self { engine, validator, cache: BridgeCache::from_settings("fee_estimate", settings) }
    }

    /// Cache key of a fee estimate.
    ///
    /// Every draft field that affects the priced fee is part of the key. Absent values are
    /// rendered as empty strings and decimals in their normalized form.
    pub fn cache_key(account: &Account, transaction: &Transaction) -> String {
        let decimal = |value: Option<Decimal>| {
            value.map(|value| value.normalize().to_string()).unwrap_or_default()
        };

        [
            account.id.clone(),
            transaction.amount.normalize().to_string(),
            transaction.recipient.clone(),
            decimal(transaction.gas_limit),
            decimal(transaction.storage_limit),
            decimal(transaction.fees),
            transaction.use_all_amount.to_string(),
        ]
        .join("_")
    }

    /// Calculates the fee of `transaction`.
    ///
    /// The recipient is validated first, and a hard recipient error is returned instead of a fee.
    #[instrument(skip_all, fields(account = %account.id))]
    pub async fn calculate(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> Result<Decimal, FeeError> {
        self.cache
            .get_or_fetch(Self::cache_key(account, transaction), move || async move {
                let validation = self
                    .validator
                    .validate_recipient(&account.currency, &transaction.recipient)
                    .await;
                if let Some(err) = validation.error {
                    debug!(%err, "Recipient rejected before pricing");
                    return Err(FeeError::from(err));
                }

                Ok(self.engine.price_transaction(account, transaction).await?)
            })
            .await
    }

    /// The underlying cache.
    pub fn cache(&self) -> &BridgeCache<Decimal> {
        &self.cache
    }
}
