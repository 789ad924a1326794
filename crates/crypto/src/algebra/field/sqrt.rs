use ark_ff::{
    fields::{Fp256, MontBackend, MontConfig},
    BigInteger,
};
use ff::{Field, PrimeField};

use super::{FieldElement, FieldElementRepr};

#[derive(MontConfig)]
#[modulus = "3618502788666131213697322783095070105623107215331596699973092056135872020481"]
#[generator = "3"]
pub struct FrConfig;
pub type Fr = Fp256<MontBackend<FrConfig, 4>>;

/// Computes sqrt(x) for a field element x, or returns None if none exist.
///
/// `ff` has no square root for this field, so the computation is delegated to
/// `ark_ff`.
pub fn field_sqrt(x: FieldElement) -> Option<FieldElement> {
    if bool::from(x.is_zero()) {
        return None;
    }

    use ark_ff::fields::{Field, PrimeField};
    let bytes = x.to_repr().0;
    let ark_elm: Fr = Fp256::from_be_bytes_mod_order(&bytes);
    let ark_sqrt: Fr = ark_elm.sqrt()?;
    let bytes: [u8; 32] = ark_sqrt.into_bigint().to_bytes_be().try_into().ok()?;
    Option::from(<FieldElement as ff::PrimeField>::from_repr(FieldElementRepr(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_no_root() {
        assert_eq!(field_sqrt(FieldElement::ZERO), None);
    }

    #[test]
    fn square_roots() {
        let x = FieldElement::from(3u64);
        let minus_x = -x;

        let y = x.square();
        let sqrt_y = field_sqrt(y).unwrap();
        assert!(sqrt_y == x || sqrt_y == minus_x);

        let minus_y = -y;
        let z = y.square();
        let sqrt_z = field_sqrt(z).unwrap();
        assert!(sqrt_z == y || sqrt_z == minus_y);
    }

    #[test]
    fn non_residue() {
        // 3 generates the multiplicative group
        assert_eq!(field_sqrt(FieldElement::from(3u64)), None);
    }
}
