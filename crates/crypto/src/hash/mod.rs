/// Pedersen hash function.
pub mod pedersen;

pub use pedersen::{compute_hash_on_elements, pedersen_hash, HashChain};
