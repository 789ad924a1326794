use crate::algebra::curve::AffinePoint;
use crate::hash::pedersen::gens::{
    PEDERSEN_P0, PEDERSEN_P1, PEDERSEN_P2, PEDERSEN_P3, PEDERSEN_P4,
};
use crate::Felt;

/// Computes the Starknet Pedersen hash of `a` and `b`.
///
/// Each input is split into its low 248 bits and its high 4 bits, and the
/// result is the x-coordinate of
/// `P0 + a_low * P1 + a_high * P2 + b_low * P3 + b_high * P4`.
///
/// See <https://docs.starkware.co/starkex/crypto/pedersen-hash-function.html>
pub fn pedersen_hash(a: Felt, b: Felt) -> Felt {
    let a_bits = a.view_bits();
    let b_bits = b.view_bits();

    // The top four bits of a Felt are always zero, so [4..8] covers bits 248..251.
    let mut acc = PEDERSEN_P0;
    acc.add(&PEDERSEN_P1.multiply(&a_bits[8..]));
    acc.add(&PEDERSEN_P2.multiply(&a_bits[4..8]));
    acc.add(&PEDERSEN_P3.multiply(&b_bits[8..]));
    acc.add(&PEDERSEN_P4.multiply(&b_bits[4..8]));

    AffinePoint::from(&acc).x_felt()
}
