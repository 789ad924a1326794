//! Constants for the stark curve, see <https://docs.starkware.co/starkex/crypto/stark-curve.html>
use crate::algebra::curve::ProjectivePoint;
use crate::algebra::field::{CurveOrderFieldElement, Felt, FieldElement};

/// Order of the curve.
pub const CURVE_ORDER: Felt = CurveOrderFieldElement::ORDER;

/// Constant `a` from curve equation, one in Montgomery form.
pub const CURVE_A: FieldElement = FieldElement::from_montgomery([
    18446744073709551585,
    18446744073709551615,
    18446744073709551615,
    576460752303422960,
]);

/// Constant `b` from curve equation
pub const CURVE_B: FieldElement = FieldElement::from_montgomery([
    3863487492851900874,
    7432612994240712710,
    12360725113329547591,
    88155977965380735,
]);

/// Montgomery representation of the Stark curve generator G.
pub const CURVE_G: ProjectivePoint = ProjectivePoint::from_montgomery(
    [
        14484022957141291997,
        5884444832209845738,
        299981207024966779,
        232005955912912577,
    ],
    [
        6241159653446987914,
        664812301889158119,
        18147424675297964973,
        405578048423154473,
    ],
);
