use ff::Field;
use pretty_assertions_sorted::assert_eq;

use crate::algebra::curve::{AffinePoint, ProjectivePoint, CURVE_G, CURVE_ORDER};
use crate::algebra::field::{CurveOrderFieldElement, Felt, FieldElement};

fn point(x: &str, y: &str) -> AffinePoint {
    AffinePoint::from_felts(Felt::from_hex_str(x).unwrap(), Felt::from_hex_str(y).unwrap())
}

fn g_double() -> AffinePoint {
    point(
        "759CA09377679ECD535A81E83039658BF40959283187C654C5416F439403CF5",
        "6F524A3400E7708D5C01A28598AD272E7455AA88778B19F93B562D7A9646C41",
    )
}

fn g_triple() -> AffinePoint {
    point(
        "411494B501A98ABD8262B0DA1351E17899A0C4EF23DD2F96FEC5BA847310B20",
        "7E1B3EBAC08924D2C26F409549191FCF94F3BF6F301ED3553E22DFB802F0686",
    )
}

#[test]
fn const_generator() {
    let expected = point(
        "1EF15C18599971B7BECED415A40F0C7DEACFD9B0D1819E03D723D8BC943CFCA",
        "5668060AA49730B7BE4801DF46EC62DE53ECD11ABE43A32873000C36E8DC1F",
    );
    let g = AffinePoint::from(&CURVE_G);
    assert_eq!(g, expected);
    assert!(g.is_on_curve());
}

#[test]
fn affine_projective_multiply() {
    let three = Felt::from_u64(3);

    let ag = AffinePoint::from(&CURVE_G);
    let ag_triple = ag.multiply(three.view_bits());

    let pg = ProjectivePoint::from(&ag);
    let pg_triple = pg.multiply(three.view_bits());

    let result = AffinePoint::from(&pg_triple);
    assert_eq!(ag_triple, result);
}

#[test]
fn affine_double() {
    let mut g = AffinePoint::from(&CURVE_G);
    g.double();
    assert_eq!(g, g_double());
}

#[test]
fn affine_add() {
    let mut g = g_double();
    g.add(&AffinePoint::from(&CURVE_G));
    assert_eq!(g, g_triple());
    assert!(g.is_on_curve());
}

#[test]
fn projective_double() {
    let mut g = CURVE_G;
    g.double();
    assert_eq!(AffinePoint::from(&g), g_double());
}

#[test]
fn projective_double_and_add() {
    let mut g = CURVE_G;
    g.double();
    g.add(&CURVE_G);
    assert_eq!(AffinePoint::from(&g), g_triple());
}

#[test]
fn projective_multiply() {
    let three = Felt::from_u64(3);
    let g_tripled = AffinePoint::from(&CURVE_G.multiply(three.view_bits()));
    assert_eq!(g_tripled, g_triple());
}

#[test]
fn multiply_by_order_is_identity() {
    let product = CURVE_G.multiply(CURVE_ORDER.view_bits());
    assert!(AffinePoint::from(&product).infinity);

    let n_minus_one = CurveOrderFieldElement::ZERO - CurveOrderFieldElement::ONE;
    let mut minus_g = AffinePoint::from(&CURVE_G);
    minus_g.negate();
    assert_eq!(AffinePoint::from(&CURVE_G.multiply_elm(&n_minus_one)), minus_g);
}

#[test]
fn adding_negation_is_identity() {
    let mut g = CURVE_G;
    let mut minus_g = CURVE_G;
    minus_g.negate();
    g.add(&minus_g);
    assert!(g.infinity);

    let mut identity = ProjectivePoint::identity();
    identity.add(&CURVE_G);
    assert_eq!(AffinePoint::from(&identity), AffinePoint::from(&CURVE_G));
}

#[test]
fn from_x() {
    let g = AffinePoint::from(&CURVE_G);
    let recovered = AffinePoint::from_x(g.x).unwrap();
    assert!(recovered.y == g.y || recovered.y == -g.y);

    // x = 0 gives y^2 = b, which is not a square
    assert!(AffinePoint::from_x(FieldElement::ZERO).is_none());
}
