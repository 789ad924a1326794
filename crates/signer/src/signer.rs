use multicall_common::{
    CallParam, ContractAddress, Fee, PublicKey, Receipt, TransactionNonce,
    TransactionSignatureElem, TransactionVersion,
};
use multicall_crypto::signature::SignatureError;
use multicall_crypto::Felt;

use crate::call::{flatten, Call, CallArrayEntry, FlattenedCalls};
use crate::error::{AuthorizeError, EncodingError, SigningError, SubmissionError};
use crate::hash::{hash_calls, hash_message, TRANSACTION_VERSION};
use crate::key::{Signature, SigningKey};
use crate::nonce::resolve_nonce;
use crate::runtime::Account;

/// Everything that is signed for one multicall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MulticallRequest {
    pub sender: ContractAddress,
    pub calls: Vec<Call>,
    pub nonce: TransactionNonce,
    pub max_fee: Fee,
    pub version: TransactionVersion,
}

impl MulticallRequest {
    pub fn new(
        sender: ContractAddress,
        calls: Vec<Call>,
        nonce: TransactionNonce,
        max_fee: Fee,
    ) -> Self {
        Self {
            sender,
            calls,
            nonce,
            max_fee,
            version: TRANSACTION_VERSION,
        }
    }

    pub fn with_version(mut self, version: TransactionVersion) -> Self {
        self.version = version;
        self
    }

    pub fn hash(&self) -> Felt {
        hash_message(
            self.sender,
            hash_calls(&self.calls),
            self.nonce,
            self.max_fee,
            self.version,
        )
    }
}

/// A multicall ready to be handed to the account's `__execute__` entry point.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignedRequest {
    pub sender: ContractAddress,
    pub call_array: Vec<CallArrayEntry>,
    pub calldata: Vec<CallParam>,
    pub nonce: TransactionNonce,
    pub max_fee: Fee,
    pub version: TransactionVersion,
    pub message_hash: Felt,
    pub signature: Signature,
}

impl SignedRequest {
    fn flattened(&self) -> FlattenedCalls {
        FlattenedCalls {
            call_array: self.call_array.clone(),
            calldata: self.calldata.clone(),
        }
    }

    /// The `__execute__` arguments, see [FlattenedCalls::into_execute_calldata].
    pub fn execute_calldata(&self) -> Vec<CallParam> {
        self.flattened().into_execute_calldata(self.nonce)
    }

    pub fn signature_elems(&self) -> Vec<TransactionSignatureElem> {
        self.signature.to_vec()
    }

    pub fn calls(&self) -> Result<Vec<Call>, EncodingError> {
        self.flattened().split()
    }

    /// Recomputes the message hash from the request contents and checks the
    /// signature against it, as the account does before executing.
    pub fn verify(&self, public_key: PublicKey) -> Result<(), SignatureError> {
        let calls = self.calls().map_err(|_| SignatureError::Message)?;
        let hash = hash_message(
            self.sender,
            hash_calls(&calls),
            self.nonce,
            self.max_fee,
            self.version,
        );
        if hash != self.message_hash {
            return Err(SignatureError::Message);
        }
        self.signature.verify(public_key, hash)
    }
}

/// Signs multicalls on behalf of a single account key.
#[derive(Debug)]
pub struct MulticallSigner {
    key: SigningKey,
}

impl MulticallSigner {
    pub fn new(key: SigningKey) -> Self {
        Self { key }
    }

    pub fn public_key(&self) -> PublicKey {
        self.key.public_key()
    }

    /// Hashes and signs a fully specified request.
    pub fn sign_request(&self, request: MulticallRequest) -> Result<SignedRequest, SigningError> {
        let message_hash = request.hash();
        tracing::debug!(
            sender=%request.sender,
            nonce=%request.nonce,
            calls=request.calls.len(),
            %message_hash,
            "Signing multicall"
        );
        let signature = self.key.sign(message_hash)?;

        let FlattenedCalls {
            call_array,
            calldata,
        } = flatten(&request.calls);

        Ok(SignedRequest {
            sender: request.sender,
            call_array,
            calldata,
            nonce: request.nonce,
            max_fee: request.max_fee,
            version: request.version,
            message_hash,
            signature,
        })
    }

    /// Authorizes `calls` with a known nonce, without consulting the account.
    pub fn authorize_with_nonce(
        &self,
        sender: ContractAddress,
        calls: Vec<Call>,
        nonce: TransactionNonce,
        max_fee: Fee,
    ) -> Result<SignedRequest, SigningError> {
        self.sign_request(MulticallRequest::new(sender, calls, nonce, max_fee))
    }

    /// Authorizes `calls` for `account`, querying its nonce only when `nonce` is `None`.
    pub async fn authorize<A: Account + ?Sized>(
        &self,
        account: &A,
        calls: Vec<Call>,
        nonce: Option<TransactionNonce>,
        max_fee: Fee,
    ) -> Result<SignedRequest, AuthorizeError> {
        let nonce = resolve_nonce(account, nonce).await?;
        Ok(self.authorize_with_nonce(account.address(), calls, nonce, max_fee)?)
    }

    /// Authorizes `calls` and has `account` execute them.
    pub async fn send_transactions<A: Account + ?Sized>(
        &self,
        account: &A,
        calls: Vec<Call>,
        nonce: Option<TransactionNonce>,
        max_fee: Fee,
    ) -> Result<Receipt, AuthorizeError> {
        let request = self.authorize(account, calls, nonce, max_fee).await?;
        let message_hash = request.message_hash;

        let receipt = account
            .execute(request)
            .await
            .map_err(|source| SubmissionError {
                account: account.address(),
                source,
            })?;

        tracing::info!(
            account=%account.address(),
            %message_hash,
            transaction_hash=%receipt.transaction_hash,
            "Multicall executed"
        );
        Ok(receipt)
    }

    /// Single call form of [MulticallSigner::send_transactions].
    pub async fn send_transaction<A: Account + ?Sized>(
        &self,
        account: &A,
        to: ContractAddress,
        method_name: &str,
        calldata: Vec<CallParam>,
        nonce: Option<TransactionNonce>,
        max_fee: Fee,
    ) -> Result<Receipt, AuthorizeError> {
        let call = Call::to_method(to, method_name, calldata);
        self.send_transactions(account, vec![call], nonce, max_fee)
            .await
    }
}
