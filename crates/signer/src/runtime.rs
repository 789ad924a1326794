//! The collaborators a signer talks to: the account contract and whoever deploys it.
use multicall_common::{ClassHash, ConstructorParam, ContractAddress, Receipt, TransactionNonce};

use crate::signer::SignedRequest;

/// An account contract able to execute signed multicalls.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Account: Send + Sync {
    fn address(&self) -> ContractAddress;

    /// The nonce the account expects the next request to carry.
    async fn get_nonce(&self) -> anyhow::Result<TransactionNonce>;

    /// Runs the account's `__execute__` entry point with the signed request.
    async fn execute(&self, request: SignedRequest) -> anyhow::Result<Receipt>;
}

/// Deploys account contracts.
#[cfg_attr(test, mockall::automock(type Account = MockAccount;))]
#[async_trait::async_trait]
pub trait Deployer: Send + Sync {
    type Account: Account;

    async fn deploy(
        &self,
        class_hash: ClassHash,
        constructor_calldata: Vec<ConstructorParam>,
    ) -> anyhow::Result<Self::Account>;
}
