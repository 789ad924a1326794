use multicall_common::TransactionNonce;

use crate::error::NonceResolutionError;
use crate::runtime::Account;

/// Uses the caller supplied nonce as-is, including an explicit zero, and only
/// queries the account when none was given.
pub async fn resolve_nonce<A: Account + ?Sized>(
    account: &A,
    nonce: Option<TransactionNonce>,
) -> Result<TransactionNonce, NonceResolutionError> {
    match nonce {
        Some(nonce) => {
            tracing::debug!(account=%account.address(), %nonce, "Using supplied nonce");
            Ok(nonce)
        }
        None => {
            let nonce = account
                .get_nonce()
                .await
                .map_err(|source| NonceResolutionError {
                    account: account.address(),
                    source,
                })?;
            tracing::debug!(account=%account.address(), %nonce, "Queried account nonce");
            Ok(nonce)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockAccount;
    use assert_matches::assert_matches;
    use multicall_common::macro_prelude::*;
    use multicall_common::ContractAddress;
    use pretty_assertions_sorted::assert_eq;

    fn account() -> MockAccount {
        let mut account = MockAccount::new();
        account
            .expect_address()
            .return_const(contract_address!("0x123"));
        account
    }

    #[test_log::test(tokio::test)]
    async fn supplied_nonce_is_not_queried() {
        let mut account = account();
        account.expect_get_nonce().never();

        let nonce = resolve_nonce(&account, Some(TransactionNonce::new(5)))
            .await
            .unwrap();
        assert_eq!(nonce, TransactionNonce::new(5));
    }

    #[test_log::test(tokio::test)]
    async fn explicit_zero_is_not_queried() {
        let mut account = account();
        account.expect_get_nonce().never();

        let nonce = resolve_nonce(&account, Some(TransactionNonce::ZERO))
            .await
            .unwrap();
        assert_eq!(nonce, TransactionNonce::ZERO);
    }

    #[test_log::test(tokio::test)]
    async fn missing_nonce_is_queried_once() {
        let mut account = account();
        account
            .expect_get_nonce()
            .times(1)
            .returning(|| Ok(TransactionNonce::new(3)));

        let nonce = resolve_nonce(&account, None).await.unwrap();
        assert_eq!(nonce, TransactionNonce::new(3));
    }

    #[test_log::test(tokio::test)]
    async fn query_failure_names_the_account() {
        let mut account = account();
        account
            .expect_get_nonce()
            .times(1)
            .returning(|| Err(anyhow::anyhow!("connection refused")));

        let error = resolve_nonce(&account, None).await.unwrap_err();
        assert_matches!(error, NonceResolutionError { account, source } => {
            assert_eq!(account, contract_address!("0x123"));
            assert_eq!(source.to_string(), "connection refused");
        });
    }
}
