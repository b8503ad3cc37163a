use crate::types::{Transaction, TransactionPatch};

/// Creates an empty draft: zero amount, no fee, limits or network info, and no recipient.
pub fn create_transaction() -> Transaction {
    Transaction::default()
}

/// Returns a copy of `transaction` with every field set in `patch` replaced.
///
/// The input draft is left untouched, so callers holding it can compare it with the result.
pub fn update_transaction(transaction: &Transaction, patch: TransactionPatch) -> Transaction {
    let TransactionPatch {
        mode,
        amount,
        fees,
        gas_limit,
        storage_limit,
        recipient,
        network_info,
        sub_account_id,
        use_all_amount,
    } = patch;

    Transaction {
        family: transaction.family,
        mode: mode.unwrap_or(transaction.mode),
        amount: amount.unwrap_or(transaction.amount),
        fees: fees.unwrap_or(transaction.fees),
        gas_limit: gas_limit.unwrap_or(transaction.gas_limit),
        storage_limit: storage_limit.unwrap_or(transaction.storage_limit),
        recipient: recipient.unwrap_or_else(|| transaction.recipient.clone()),
        network_info: network_info.unwrap_or_else(|| transaction.network_info.clone()),
        sub_account_id: sub_account_id.unwrap_or_else(|| transaction.sub_account_id.clone()),
        use_all_amount: use_all_amount.unwrap_or(transaction.use_all_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Family, Mode, TezosNetworkInfo};
    use rust_decimal::Decimal;

    #[test]
    fn test_create_defaults() {
        let tx = create_transaction();
        assert_eq!(tx.family, Family::Tezos);
        assert_eq!(tx.mode, Mode::Send);
        assert_eq!(tx.amount, Decimal::ZERO);
        assert_eq!(tx.fees, None);
        assert_eq!(tx.gas_limit, None);
        assert_eq!(tx.storage_limit, None);
        assert_eq!(tx.network_info, None);
        assert!(tx.recipient.is_empty());
        assert!(!tx.use_all_amount);
    }

    #[test]
    fn test_update_replaces_only_patched_fields() {
        let tx = Transaction {
            amount: Decimal::from(10),
            fees: Some(Decimal::from(402)),
            recipient: "tz1Ke2h7sDdakHJQh8WX4Z372du1KChsksyU".into(),
            network_info: Some(TezosNetworkInfo::new(Decimal::from(402))),
            ..create_transaction()
        };

        let updated = update_transaction(
            &tx,
            TransactionPatch::new().amount(Decimal::from(20)).gas_limit(Some(Decimal::from(1_420))),
        );

        assert_eq!(updated.amount, Decimal::from(20));
        assert_eq!(updated.gas_limit, Some(Decimal::from(1_420)));
        assert_eq!(updated.fees, tx.fees);
        assert_eq!(updated.recipient, tx.recipient);
        assert_eq!(updated.network_info, tx.network_info);

        // the input is untouched
        assert_eq!(tx.amount, Decimal::from(10));
        assert_eq!(tx.gas_limit, None);
    }

    #[test]
    fn test_update_can_clear_nullable_fields() {
        let tx = Transaction {
            fees: Some(Decimal::from(402)),
            sub_account_id: Some("token".into()),
            ..create_transaction()
        };

        let updated =
            update_transaction(&tx, TransactionPatch::new().fees(None).sub_account_id(None));
        assert_eq!(updated.fees, None);
        assert_eq!(updated.sub_account_id, None);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let tx = Transaction {
            mode: Mode::Delegate,
            use_all_amount: true,
            recipient: "tz1Ke2h7sDdakHJQh8WX4Z372du1KChsksyU".into(),
            ..create_transaction()
        };
        assert_eq!(update_transaction(&tx, TransactionPatch::new()), tx);
    }
}
