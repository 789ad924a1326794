use bitvec::{order::Msb0, slice::BitSlice};
use ff::Field;

use crate::algebra::curve::{ProjectivePoint, CURVE_A, CURVE_B};
use crate::algebra::field::{field_sqrt, Felt, FieldElement};

/// An affine point on the Stark curve `y^2 = x^3 + x + b` over [FieldElement].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub infinity: bool,
}

impl From<&ProjectivePoint> for AffinePoint {
    fn from(p: &ProjectivePoint) -> Self {
        if p.infinity {
            return AffinePoint::identity();
        }
        let zinv: Option<FieldElement> = p.z.invert().into();
        match zinv {
            Some(zinv) => AffinePoint {
                x: p.x * zinv,
                y: p.y * zinv,
                infinity: false,
            },
            None => AffinePoint::identity(),
        }
    }
}

impl AffinePoint {
    /// Creates a point from canonical coordinates. The point is not checked
    /// to lie on the curve, see [AffinePoint::is_on_curve].
    pub fn from_felts(x: Felt, y: Felt) -> Self {
        Self {
            x: FieldElement::from(x),
            y: FieldElement::from(y),
            infinity: false,
        }
    }

    /// Recovers a point from its x-coordinate.
    ///
    /// Which of the two possible y-coordinates is returned is unspecified.
    pub fn from_x(x: FieldElement) -> Option<Self> {
        let y2 = x.square() * x + CURVE_A * x + CURVE_B;
        let y = field_sqrt(y2)?;
        Some(AffinePoint {
            x,
            y,
            infinity: false,
        })
    }

    /// Point at infinity.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::ZERO,
            y: FieldElement::ZERO,
            infinity: true,
        }
    }

    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        self.y.square() == self.x.square() * self.x + CURVE_A * self.x + CURVE_B
    }

    pub fn x_felt(&self) -> Felt {
        Felt::from(self.x)
    }

    pub fn y_felt(&self) -> Felt {
        Felt::from(self.y)
    }

    pub fn negate(&mut self) {
        self.y = -self.y;
    }

    pub fn double(&mut self) {
        if self.infinity {
            return;
        }

        // l = (3x^2+a)/2y
        let inv: Option<FieldElement> = self.y.double().invert().into();
        let Some(inv) = inv else {
            *self = AffinePoint::identity();
            return;
        };
        let x2 = self.x.square();
        let lambda = (x2 + x2.double() + CURVE_A) * inv;

        let x = lambda.square() - self.x.double();
        let y = lambda * (self.x - x) - self.y;

        self.x = x;
        self.y = y;
    }

    pub fn add(&mut self, other: &AffinePoint) {
        if other.infinity {
            return;
        }
        if self.infinity {
            *self = *other;
            return;
        }
        if self.x == other.x {
            if self.y == other.y {
                self.double();
            } else {
                *self = AffinePoint::identity();
            }
            return;
        }

        // l = (y2-y1)/(x2-x1), the divisor is non-zero as x1 != x2
        let inv: Option<FieldElement> = (other.x - self.x).invert().into();
        let Some(inv) = inv else {
            *self = AffinePoint::identity();
            return;
        };
        let lambda = (other.y - self.y) * inv;

        let x = lambda.square() - self.x - other.x;
        let y = lambda * (self.x - x) - self.y;

        self.x = x;
        self.y = y;
    }

    /// Multiplies the point by a scalar given as bits in MSB order.
    pub fn multiply(&self, bits: &BitSlice<u8, Msb0>) -> AffinePoint {
        let mut product = AffinePoint::identity();
        for b in bits.iter() {
            product.double();
            if *b {
                product.add(self);
            }
        }
        product
    }
}
