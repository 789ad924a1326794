mod chain;
mod gens;
mod hash;

pub use chain::{compute_hash_on_elements, HashChain};
pub use gens::*;
pub use hash::pedersen_hash;
