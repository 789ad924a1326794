use bitvec::{order::Msb0, slice::BitSlice};
use ff::Field;

use crate::algebra::curve::AffinePoint;
use crate::algebra::field::{CurveOrderFieldElement, FieldElement};

/// A projective point on the Stark curve over [FieldElement].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProjectivePoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
    pub infinity: bool,
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        if p.infinity {
            return ProjectivePoint::identity();
        }
        ProjectivePoint {
            x: p.x,
            y: p.y,
            z: FieldElement::ONE,
            infinity: false,
        }
    }
}

impl ProjectivePoint {
    /// Create a point from (x,y) as raw u64's in Montgomery representation
    pub(crate) const fn from_montgomery(x: [u64; 4], y: [u64; 4]) -> Self {
        Self {
            x: FieldElement::from_montgomery(x),
            y: FieldElement::from_montgomery(y),
            // R mod p, i.e. one in Montgomery form
            z: FieldElement::from_montgomery([
                18446744073709551585,
                18446744073709551615,
                18446744073709551615,
                576460752303422960,
            ]),
            infinity: false,
        }
    }

    /// Point at infinity
    pub fn identity() -> Self {
        Self {
            x: FieldElement::ZERO,
            y: FieldElement::ZERO,
            z: FieldElement::ONE,
            infinity: true,
        }
    }

    pub fn negate(&mut self) {
        self.y = -self.y;
    }

    pub fn double(&mut self) {
        if self.infinity {
            return;
        }
        if bool::from(self.y.is_zero()) {
            *self = ProjectivePoint::identity();
            return;
        }

        // t=3x^2+az^2 with a=1
        let x2 = self.x.square();
        let t = x2 + x2.double() + self.z.square();
        let u = (self.y * self.z).double();
        let v = (u * self.x * self.y).double();
        let w = t.square() - v.double();

        let uy = u * self.y;

        let x = u * w;
        let y = t * (v - w) - uy.square().double();
        let z = u.square() * u;

        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn add(&mut self, other: &ProjectivePoint) {
        if other.infinity {
            return;
        }
        if self.infinity {
            *self = *other;
            return;
        }
        let u0 = self.x * other.z;
        let u1 = other.x * self.z;
        let t0 = self.y * other.z;
        let t1 = other.y * self.z;
        if u0 == u1 {
            if t0 != t1 {
                *self = ProjectivePoint::identity();
            } else {
                self.double();
            }
            return;
        }

        let t = t0 - t1;
        let u = u0 - u1;
        let u2 = u.square();

        let v = self.z * other.z;
        let w = t.square() * v - u2 * (u0 + u1);
        let u3 = u * u2;

        let x = u * w;
        let y = t * (u0 * u2 - w) - t0 * u3;
        let z = u3 * v;

        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Multiplies the point by a scalar given as bits in MSB order.
    pub fn multiply(&self, bits: &BitSlice<u8, Msb0>) -> ProjectivePoint {
        let mut product = ProjectivePoint::identity();
        for b in bits.iter() {
            product.double();
            if *b {
                product.add(self);
            }
        }
        product
    }

    /// Multiplies the point by a curve order field element.
    pub fn multiply_elm(&self, elm: &CurveOrderFieldElement) -> ProjectivePoint {
        let scalar = elm.to_felt();
        self.multiply(scalar.view_bits())
    }
}
