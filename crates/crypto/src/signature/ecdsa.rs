use std::fmt::{Display, Formatter};

use ff::Field;

use crate::algebra::curve::{AffinePoint, ProjectivePoint, CURVE_G};
use crate::algebra::field::{CurveOrderFieldElement, Felt, FieldElement};

/// Signature error
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum SignatureError {
    /// Error if the signature is invalid during verification.
    Signature,

    /// Error for invalid randomness.
    Randomness,

    /// Error for invalid message.
    Message,

    /// Error for invalid secret key.
    SecretKey,

    /// Error for invalid public key.
    PublicKey,
}

impl Display for SignatureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureError::Signature => write!(f, "invalid signature"),
            SignatureError::Message => write!(f, "invalid message"),
            SignatureError::Randomness => write!(f, "invalid randomness"),
            SignatureError::SecretKey => write!(f, "invalid secret key"),
            SignatureError::PublicKey => write!(f, "invalid public key"),
        }
    }
}

impl std::error::Error for SignatureError {}

/// Secret keys must lie in `[1, n)`.
fn secret_scalar(sk: Felt) -> Result<CurveOrderFieldElement, SignatureError> {
    match CurveOrderFieldElement::from_felt(sk) {
        Some(sk) if !bool::from(sk.is_zero()) => Ok(sk),
        _ => Err(SignatureError::SecretKey),
    }
}

/// Retrieve the full public key `sk * G` from a private key.
pub fn get_pk_full(sk: Felt) -> Option<AffinePoint> {
    let sk = secret_scalar(sk).ok()?;
    Some(AffinePoint::from(&CURVE_G.multiply_elm(&sk)))
}

/// Retrieve the partial public-key, i.e. the x-coordinate, from a private key.
pub fn get_pk(sk: Felt) -> Option<Felt> {
    get_pk_full(sk).map(|pk| pk.x_felt())
}

/// Generate a signature `(r,s)` on message z with secret key sk with `k` from thread_rng, not constant time!
///
/// This algorithm tries different random `k` from thread_rng until it finds a valid signature. The
/// algorithm is **NOT** constant time and care should be taken when used in timing-sensitive contexts.
pub fn ecdsa_sign(sk: Felt, z: Felt) -> Result<(Felt, Felt), SignatureError> {
    let rng = &mut rand::thread_rng();
    loop {
        let k = Felt::random(&mut *rng);
        match ecdsa_sign_k(sk, z, k) {
            Ok(sig) => return Ok(sig),
            Err(SignatureError::Randomness) => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Generate a signature `(r,s)` on message z with secret key sk and explicit randomness k, not constant time!
///
/// Never sign the same message with the same randomness twice, or your key may be extracted. The
/// algorithm is **NOT** constant time and care should be taken when used in timing-sensitive contexts.
pub fn ecdsa_sign_k(sk: Felt, z: Felt, k: Felt) -> Result<(Felt, Felt), SignatureError> {
    let sk = secret_scalar(sk)?;
    if z.has_more_than_251_bits() {
        return Err(SignatureError::Message);
    }
    let z = CurveOrderFieldElement::from_felt(z).ok_or(SignatureError::Message)?;
    let k = match CurveOrderFieldElement::from_felt(k) {
        Some(k) if !bool::from(k.is_zero()) => k,
        _ => return Err(SignatureError::Randomness),
    };

    // r = (kG).x must be in [1, 2^251)
    let x = AffinePoint::from(&CURVE_G.multiply_elm(&k)).x_felt();
    if x.is_zero() || x.has_more_than_251_bits() {
        return Err(SignatureError::Randomness);
    }
    let r = CurveOrderFieldElement::from_felt(x).ok_or(SignatureError::Randomness)?;

    // z + r*sk must be in [1, 2^251)
    let t = z + r * sk;
    if bool::from(t.is_zero()) || t.to_felt().has_more_than_251_bits() {
        return Err(SignatureError::Randomness);
    }

    // w = k/t = 1/s must be in [1, 2^251); t is non-zero and so invertible.
    let tinv: Option<CurveOrderFieldElement> = t.invert().into();
    let tinv = tinv.ok_or(SignatureError::Randomness)?;
    let w = k * tinv;
    if w.to_felt().has_more_than_251_bits() {
        return Err(SignatureError::Randomness);
    }

    let kinv: Option<CurveOrderFieldElement> = k.invert().into();
    let s = kinv.ok_or(SignatureError::Randomness)? * t;

    Ok((r.to_felt(), s.to_felt()))
}

/// Retrieve the point for a public key while validating it's non-zero and on the curve.
///
/// Only the x-coordinate is known, so either of the two points sharing it may be returned.
pub fn get_pk_point(pk: Felt) -> Option<AffinePoint> {
    match AffinePoint::from_x(FieldElement::from(pk)) {
        Some(p) if !p.infinity => Some(p),
        _ => None,
    }
}

/// Verify an ECDSA signature with a partial public key.
pub fn ecdsa_verify_partial(pk: Felt, z: Felt, r: Felt, s: Felt) -> Result<(), SignatureError> {
    let pk_point = get_pk_point(pk).ok_or(SignatureError::PublicKey)?;
    let pk_proj = ProjectivePoint::from(&pk_point);
    ecdsa_verify_inner(pk_proj, z, r, s)
}

/// Verify an ECDSA signature `(r,s)` on message `z` given a full public key `pk=(x,y)`.
pub fn ecdsa_verify(pk: AffinePoint, z: Felt, r: Felt, s: Felt) -> Result<(), SignatureError> {
    if pk.infinity || !pk.is_on_curve() {
        return Err(SignatureError::PublicKey);
    }
    let pk_proj = ProjectivePoint::from(&pk);
    ecdsa_verify_inner(pk_proj, z, r, s)
}

/// Verify an ECDSA signature `(r,s)` on message `z` given a validated public key `pk`.
///
/// The caller should check that the public key is on the curve and not infinity.
pub fn ecdsa_verify_inner(
    pk: ProjectivePoint,
    z: Felt,
    r: Felt,
    s: Felt,
) -> Result<(), SignatureError> {
    // Check hard bound on message and signature.
    if z.has_more_than_251_bits() {
        return Err(SignatureError::Message);
    }
    if r.is_zero() || r.has_more_than_251_bits() {
        return Err(SignatureError::Signature);
    }

    let cf_z = CurveOrderFieldElement::from_felt(z).ok_or(SignatureError::Message)?;
    let cf_r = CurveOrderFieldElement::from_felt(r).ok_or(SignatureError::Signature)?;
    let cf_s = CurveOrderFieldElement::from_felt(s).ok_or(SignatureError::Signature)?;

    // w = 1/s must be in [1, 2^251)
    let w: Option<CurveOrderFieldElement> = cf_s.invert().into();
    let w = w.ok_or(SignatureError::Signature)?;
    if w.to_felt().has_more_than_251_bits() {
        return Err(SignatureError::Signature);
    }

    // Compute u1 = z/s and u2 = r/s
    let u1 = cf_z * w;
    let u2 = cf_r * w;

    // Compute r1 = u1*G + u2*pk and r2 = u1*G - u2*pk
    let u1g = CURVE_G.multiply_elm(&u1);
    let u2pk = pk.multiply_elm(&u2);
    let r1 = {
        let mut tmp = u1g;
        tmp.add(&u2pk);
        AffinePoint::from(&tmp)
    };
    let r2 = {
        let mut minus_u2pk = u2pk;
        minus_u2pk.negate();

        let mut tmp = u1g;
        tmp.add(&minus_u2pk);
        AffinePoint::from(&tmp)
    };

    if (!r1.infinity && r1.x_felt() == r) || (!r2.infinity && r2.x_felt() == r) {
        Ok(())
    } else {
        Err(SignatureError::Signature)
    }
}
