use crate::{
    bridge::TezosBridge,
    constants::FEE_TOO_HIGH_FACTOR,
    error::{StatusError, StatusWarning},
    types::{Account, Transaction, TransactionStatus},
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

impl TezosBridge {
    /// Computes the validation errors, warnings and totals of `transaction`.
    ///
    /// Never fails: every problem is reported in the returned status. Balances are read from the
    /// targeted sub-account when the draft names one.
    #[instrument(skip_all, fields(account = %account.id))]
    pub async fn get_transaction_status(
        &self,
        account: &Account,
        transaction: &Transaction,
    ) -> TransactionStatus {
        let mut status = TransactionStatus {
            recipient_is_read_only: transaction.sub_account_id.is_some(),
            ..Default::default()
        };

        let balance = match account.balance_of(transaction.sub_account_id.as_deref()) {
            Some(balance) => balance,
            None => {
                let id = transaction.sub_account_id.clone().unwrap_or_default();
                status.errors.transaction = Some(StatusError::UnknownSubAccount(id));
                Decimal::ZERO
            }
        };

        let estimated_fees = if transaction.fees.is_none() {
            status.errors.fees = Some(StatusError::FeeNotLoaded);
            Decimal::ZERO
        } else {
            match self.fee_calculator.calculate(account, transaction).await {
                Ok(fees) => fees,
                Err(err) if err.is_not_enough_balance() => {
                    status.errors.amount = Some(err.into());
                    Decimal::ZERO
                }
                Err(err) => {
                    debug!(%err, "Fee estimation failed");
                    if status.errors.transaction.is_none() {
                        status.errors.transaction = Some(err.into());
                    }
                    Decimal::ZERO
                }
            }
        };

        let totals = if transaction.use_all_amount {
            balance.checked_sub(estimated_fees).map(|amount| (amount, balance))
        } else {
            transaction.amount.checked_add(estimated_fees).map(|total| (transaction.amount, total))
        };
        let (amount, total_spent) = totals.unwrap_or_else(|| {
            if status.errors.amount.is_none() {
                status.errors.amount = Some(StatusError::AmountOverflow);
            }
            if transaction.use_all_amount {
                (balance.saturating_sub(estimated_fees), balance)
            } else {
                (transaction.amount, transaction.amount.saturating_add(estimated_fees))
            }
        });

        // an overflowing product is necessarily above any representable amount
        let fee_too_high = estimated_fees
            .checked_mul(Decimal::from(FEE_TOO_HIGH_FACTOR))
            .is_none_or(|scaled| scaled > amount);
        if amount > Decimal::ZERO && fee_too_high {
            status.warnings.fee_too_high =
                Some(StatusWarning::FeeTooHigh { fees: estimated_fees, amount });
        }

        let validation =
            self.validator.validate_recipient(&account.currency, &transaction.recipient).await;
        status.errors.recipient = validation.error.map(Into::into);
        status.warnings.recipient = validation.warning.map(Into::into);

        status.estimated_fees = estimated_fees;
        status.amount = amount;
        status.total_spent = total_spent;
        status
    }
}
