use ff::{Field, PrimeField};

use super::{Felt, FieldElement};

/// An element of the scalar field of the Stark curve, i.e. integers modulo the
/// curve order `n`.
#[derive(PrimeField)]
#[PrimeFieldModulus = "3618502788666131213697322783095070105526743751716087489154079457884512865583"]
#[PrimeFieldGenerator = "3"]
#[PrimeFieldReprEndianness = "big"]
pub struct CurveOrderFieldElement([u64; 4]);

impl CurveOrderFieldElement {
    /// Big-endian bytes of the curve order.
    pub const ORDER: Felt = match Felt::from_be_bytes([
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xb7, 0x81, 0x12, 0x6d, 0xca, 0xe7, 0xb2, 0x32, 0x1e, 0x66, 0xa2, 0x41, 0xad, 0xc6,
        0x4d, 0x2f,
    ]) {
        Ok(order) => order,
        Err(_) => panic!("curve order is less than the field modulus"),
    };

    /// Interprets a [Felt] as a scalar, or `None` if it is not less than the
    /// curve order.
    pub fn from_felt(value: Felt) -> Option<Self> {
        if value < Self::ORDER {
            Option::from(Self::from_repr(CurveOrderFieldElementRepr(value.to_be_bytes())))
        } else {
            None
        }
    }

    /// Reduces a [Felt] modulo the curve order.
    pub fn reduce_felt(value: Felt) -> Self {
        match Self::from_felt(value) {
            Some(elm) => elm,
            None => {
                // value < p < 2n, so a single subtraction suffices
                let over = FieldElement::from(value) - FieldElement::from(Self::ORDER);
                Self::from_felt(Felt::from(over)).unwrap_or(Self::ZERO)
            }
        }
    }

    pub fn to_felt(&self) -> Felt {
        // n < p, so every scalar is a valid felt.
        Felt::from_be_bytes(self.to_repr().0).unwrap()
    }
}
