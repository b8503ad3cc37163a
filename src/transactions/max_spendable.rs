use crate::{
    bridge::TezosBridge,
    constants::{ESTIMATION_RECIPIENT, MAX_PREPARE_ROUNDS},
    error::BridgeError,
    types::{Account, Transaction, TransactionPatch},
};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

impl TezosBridge {
    /// Estimates the largest amount `account` can send.
    ///
    /// A sub-account can always send its whole balance since fees are paid by the parent account.
    /// An unknown sub-account has nothing to send. Otherwise `transaction` (or an empty draft) is
    /// prepared in all-balance mode and priced, and the remaining balance is returned. An account
    /// that cannot even cover the fees has nothing to spend.
    #[instrument(skip_all, fields(account = %account.id))]
    pub async fn estimate_max_spendable(
        &self,
        account: &Account,
        transaction: Option<&Transaction>,
    ) -> Result<Decimal, BridgeError> {
        let draft = transaction.cloned().unwrap_or_else(|| self.create_transaction());
        if let Some(id) = &draft.sub_account_id {
            let Some(sub_account) = account.sub_account(id) else {
                warn!(sub_account = %id, "Unknown sub-account, nothing to spend");
                return Ok(Decimal::ZERO);
            };
            return Ok(sub_account.balance);
        }

        let mut patch = TransactionPatch::new().use_all_amount(true);
        if draft.recipient.is_empty() {
            patch = patch.recipient(ESTIMATION_RECIPIENT);
        }
        let draft = self.update_transaction(&draft, patch);
        let draft = self.prepare_until_stable(account, draft, MAX_PREPARE_ROUNDS).await?;

        let fees = match self.fee_calculator.calculate(account, &draft).await {
            Ok(fees) => fees,
            Err(err) if err.is_not_enough_balance() => {
                debug!(%err, "Balance does not cover fees");
                return Ok(Decimal::ZERO);
            }
            Err(err) => return Err(err.into()),
        };

        Ok(account.balance.saturating_sub(fees).max(Decimal::ZERO))
    }
}
