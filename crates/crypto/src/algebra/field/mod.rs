mod base;
mod curveorder;
mod felt;
mod serde;
mod sqrt;

pub use base::{FieldElement, FieldElementRepr};
pub use curveorder::{CurveOrderFieldElement, CurveOrderFieldElementRepr};
pub use felt::{Felt, HexParseError, OverflowError};
pub use sqrt::field_sqrt;
