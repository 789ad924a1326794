//! Multicall_crypto is a library for the cryptographic primitives used when
//! authorizing Starknet account transactions.

/// Contains algebra such as finite fields and elliptic curves.
pub mod algebra;

/// Contains hash functions such as Pedersen.
pub mod hash;

/// Contains signature functions such as ECDSA.
pub mod signature;

pub use algebra::{
    AffinePoint, CurveOrderFieldElement, Felt, FieldElement, HexParseError, OverflowError,
    ProjectivePoint,
};
