//! Named accounts deployed on first use, each with a key derived from its name.
use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use multicall_common::{ClassHash, ConstructorParam, EntryPoint};
use multicall_crypto::signature::SignatureError;

use crate::key::SigningKey;
use crate::runtime::{Account, Deployer};
use crate::signer::MulticallSigner;

/// A deployed account and the signer holding its key.
#[derive(Debug)]
pub struct NamedAccount<A> {
    pub signer: MulticallSigner,
    pub account: A,
}

type Slot<A> = Arc<tokio::sync::OnceCell<Arc<NamedAccount<A>>>>;

/// Caches one deployed account per name.
///
/// Concurrent lookups of the same name wait on each other, so every name is
/// deployed at most once for the lifetime of the cache. Lookups of different
/// names proceed independently.
pub struct AccountCache<D: Deployer> {
    deployer: D,
    class_hash: ClassHash,
    accounts: tokio::sync::Mutex<HashMap<String, Slot<D::Account>>>,
}

impl<D: Deployer> AccountCache<D> {
    pub fn new(deployer: D, class_hash: ClassHash) -> Self {
        Self {
            deployer,
            class_hash,
            accounts: Default::default(),
        }
    }

    /// The key of the account called `name`: the truncated keccak of the name reduced
    /// into the curve order.
    pub fn key_for(name: &str) -> Result<SigningKey, SignatureError> {
        SigningKey::from_seed(EntryPoint::hashed(name.as_bytes()).0)
    }

    /// Returns the account called `name`, deploying it first if needed.
    ///
    /// A failed deployment is not cached.
    pub async fn get(&self, name: &str) -> anyhow::Result<Arc<NamedAccount<D::Account>>> {
        // The map lock only covers finding the slot, never a deployment.
        let slot = Arc::clone(self.accounts.lock().await.entry(name.to_owned()).or_default());

        let account = slot.get_or_try_init(|| self.deploy(name)).await?;
        Ok(Arc::clone(account))
    }

    async fn deploy(&self, name: &str) -> anyhow::Result<Arc<NamedAccount<D::Account>>> {
        let key = Self::key_for(name).with_context(|| format!("Deriving key for {name}"))?;
        let public_key = key.public_key();
        let account = self
            .deployer
            .deploy(self.class_hash, vec![ConstructorParam(public_key.0)])
            .await
            .with_context(|| format!("Deploying account {name}"))?;

        tracing::info!(%name, address=%account.address(), %public_key, "Deployed account");

        Ok(Arc::new(NamedAccount {
            signer: MulticallSigner::new(key),
            account,
        }))
    }

    /// The number of successfully deployed accounts.
    pub async fn len(&self) -> usize {
        self.accounts
            .lock()
            .await
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
