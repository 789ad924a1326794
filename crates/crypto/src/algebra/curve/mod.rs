mod affine;
mod params;
mod projective;

pub use affine::AffinePoint;
pub use params::{CURVE_A, CURVE_B, CURVE_G, CURVE_ORDER};
pub use projective::ProjectivePoint;

#[cfg(test)]
mod tests;
