use super::update_transaction;
use crate::{
    bridge::TezosBridge,
    error::BridgeError,
    types::{Account, NetworkInfo, TezosNetworkInfo, Transaction, TransactionPatch},
};
use tracing::{debug, instrument, trace, warn};

impl TezosBridge {
    /// Enriches `transaction` with network info, gas and storage limits, a fee and a default
    /// recipient.
    ///
    /// Returns the input unchanged once nothing new can be resolved, so repeatedly preparing a
    /// draft reaches a fixed point. Gas estimation failures leave the limits unset; recipient
    /// problems are reported by [`get_transaction_status`](Self::get_transaction_status) instead.
    ///
    /// # Panics
    ///
    /// Panics if the engine returns network info of a chain family other than Tezos.
    #[instrument(skip_all, fields(account = %account.id))]
    pub async fn prepare_transaction(
        &self,
        account: &Account,
        transaction: Transaction,
    ) -> Result<Transaction, BridgeError> {
        let network_info = match &transaction.network_info {
            Some(info) => info.clone(),
            None => {
                let info = self.engine.fetch_network_info(account).await?;
                debug!(family = %info.family(), "Fetched network info");
                expect_tezos(info)
            }
        };

        let mut gas_limit = transaction.gas_limit;
        let mut storage_limit = transaction.storage_limit;
        if (gas_limit.is_none() || storage_limit.is_none()) && !transaction.recipient.is_empty() {
            let validation =
                self.validator.validate_recipient(&account.currency, &transaction.recipient).await;
            if validation.is_valid() {
                match self.gas_estimator.estimate(account, &transaction.recipient).await {
                    Ok(estimate) => {
                        gas_limit = Some(estimate.gas_limit);
                        storage_limit = Some(estimate.storage_limit);
                    }
                    Err(err) => {
                        warn!(%err, recipient = %transaction.recipient, "Gas estimation failed");
                    }
                }
            }
        }

        let fees = Some(transaction.fees.unwrap_or(network_info.fees));

        // Sub-account transfers without a recipient default to the account itself. Fees of such
        // transfers are still priced as plain transfers.
        let recipient = if transaction.sub_account_id.is_some() && transaction.recipient.is_empty()
        {
            account.fresh_address.clone()
        } else {
            transaction.recipient.clone()
        };

        if transaction.network_info.as_ref() == Some(&network_info)
            && transaction.gas_limit == gas_limit
            && transaction.storage_limit == storage_limit
            && transaction.fees == fees
            && transaction.recipient == recipient
        {
            trace!("Draft is stable");
            return Ok(transaction);
        }

        Ok(update_transaction(
            &transaction,
            TransactionPatch::new()
                .network_info(Some(network_info))
                .gas_limit(gas_limit)
                .storage_limit(storage_limit)
                .fees(fees)
                .recipient(recipient),
        ))
    }

    /// Prepares `transaction` until it stops changing, at most `max_rounds` times.
    ///
    /// The last prepared draft is returned if the bound is hit first.
    pub async fn prepare_until_stable(
        &self,
        account: &Account,
        mut transaction: Transaction,
        max_rounds: usize,
    ) -> Result<Transaction, BridgeError> {
        for round in 1..=max_rounds {
            let prepared = self.prepare_transaction(account, transaction.clone()).await?;
            if prepared == transaction {
                debug!(round, "Draft reached a fixed point");
                return Ok(prepared);
            }
            transaction = prepared;
        }

        warn!(max_rounds, "Draft did not stabilize");
        Ok(transaction)
    }
}

/// Unwraps Tezos network info.
///
/// An engine answering with another family's parameters is broken, there is nothing to recover.
fn expect_tezos(info: NetworkInfo) -> TezosNetworkInfo {
    match info {
        NetworkInfo::Tezos(info) => info,
        other => panic!("expected tezos network info, got {}", other.family()),
    }
}
