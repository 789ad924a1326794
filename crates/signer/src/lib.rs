//! Authorizes batches of calls for execution by a Starknet account contract.
//!
//! A [MulticallSigner] flattens the calls into the account's call array and
//! calldata, hashes them together with the sender, nonce and fee under the
//! transaction domain tag and signs the result with the account key.
pub mod accounts;
pub mod call;
pub mod error;
pub mod hash;
pub mod key;
pub mod nonce;
pub mod runtime;
pub mod signer;

pub use accounts::{AccountCache, NamedAccount};
pub use call::{flatten, parse_calls, parse_felt, parse_hex_felt, Call, CallArrayEntry, FlattenedCalls, RawCall};
pub use error::{AuthorizeError, EncodingError, NonceResolutionError, SigningError, SubmissionError};
pub use hash::{hash_call, hash_calls, hash_message, DOMAIN_TAG, TRANSACTION_VERSION};
pub use key::{Signature, SigningKey};
pub use nonce::resolve_nonce;
pub use runtime::{Account, Deployer};
pub use signer::{MulticallRequest, MulticallSigner, SignedRequest};
