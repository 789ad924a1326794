use ff::PrimeField;

use super::Felt;

/// An element of the Stark base field, `p = 2^251 + 17 * 2^192 + 1`.
///
/// Stored in Montgomery form. Arithmetic on curve coordinates and hash
/// inputs goes through this type, while [Felt] is the canonical byte form.
#[derive(PrimeField)]
#[PrimeFieldModulus = "3618502788666131213697322783095070105623107215331596699973092056135872020481"]
#[PrimeFieldGenerator = "3"]
#[PrimeFieldReprEndianness = "big"]
pub struct FieldElement([u64; 4]);

impl FieldElement {
    /// Creates an element directly from its little-endian Montgomery limbs.
    pub(crate) const fn from_montgomery(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }
}

impl From<Felt> for FieldElement {
    fn from(felt: Felt) -> Self {
        // Safe because Felt is always less than the modulus.
        Self::from_repr(FieldElementRepr(felt.to_be_bytes())).unwrap()
    }
}

impl From<FieldElement> for Felt {
    fn from(elm: FieldElement) -> Self {
        // Safe because FieldElement is always reduced.
        Felt::from_be_bytes(elm.to_repr().0).unwrap()
    }
}
