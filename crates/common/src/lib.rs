//! Contains core types that are shared by the multicall signer and its callers.
//!
//! This includes many trivial wrappers around [Felt] which help by providing additional type safety,
//! as well as the helpers used to encode values into and out of field elements.
use multicall_crypto::Felt;

pub mod encoding;
pub mod event;
mod macros;
pub mod receipt;

pub use encoding::{
    decode_integer_as_text, encode_text_as_integer, LimbOverflow, TextEncodingError, Uint256,
};
pub use event::{contains_event, contains_exact_event, event_key, Event};
pub use receipt::Receipt;

#[doc(hidden)]
pub use multicall_crypto as crypto;

impl EntryPoint {
    /// Returns a new EntryPoint which has been truncated to fit from Keccak256 digest of input.
    ///
    /// See: <https://starknet.io/documentation/contracts/#function_selector>
    pub fn hashed(input: &[u8]) -> Self {
        use sha3::Digest;
        EntryPoint(truncated_keccak(<[u8; 32]>::from(sha3::Keccak256::digest(
            input,
        ))))
    }

    /// The constructor [EntryPoint], defined as the truncated keccak of b"constructor".
    pub const CONSTRUCTOR: Self =
        entry_point!("0x028FFE4FF0F226A9107253E17A904099AA4F63A02A5621DE0576E5AA71BC5194");

    /// The account's multicall entry point, the truncated keccak of b"__execute__".
    pub const EXECUTE: Self =
        entry_point!("0x015d40a3d6ca2ac30f4031e42be28da9b056fef9bb7357ac5e85627ee876e5ad");
}

impl TransactionVersion {
    pub const ONE: Self = Self(Felt::ONE);
}

impl TransactionNonce {
    pub const fn new(nonce: u64) -> Self {
        Self(Felt::from_u64(nonce))
    }
}

impl Fee {
    pub const fn new(fee: u128) -> Self {
        Self(Felt::from_u128(fee))
    }
}

macros::felt_newtypes!([
    CallParam,
    CallResultValue,
    ClassHash,
    ConstructorParam,
    ContractAddress,
    EntryPoint,
    EventData,
    EventKey,
    Fee,
    PublicKey,
    TransactionHash,
    TransactionNonce,
    TransactionSignatureElem,
    TransactionVersion,
]);

/// See:
/// <https://github.com/starkware-libs/cairo-lang/blob/64a7f6aed9757d3d8d6c28bd972df73272b0cb0a/src/starkware/starknet/public/abi.py#L21-L26>
pub fn truncated_keccak(mut plain: [u8; 32]) -> Felt {
    // cairo-lang masks with (2**250 - 1): 0x03 followed by 31 0xff bytes, big-endian.
    // truncation is needed not to overflow the field element.
    plain[0] &= 0x03;
    match Felt::from_be_bytes(plain) {
        Ok(felt) => felt,
        Err(_) => unreachable!("cannot overflow: smaller than modulus"),
    }
}
