use crate::hash::pedersen_hash;
use crate::Felt;

/// HashChain is the structure used over at cairo side to represent the hash
/// construction of `compute_hash_on_elements`.
///
/// Empty hash chained value equals `H(0, 0)` where `H` is the [`pedersen_hash()`] function, and the
/// second value is the number of values hashed together in this chain. For other values, the
/// accumulator is on each update replaced with the `H(hash, value)` and the number of count
/// incremented by one.
#[derive(Default, Clone, Debug)]
pub struct HashChain {
    hash: Felt,
    count: usize,
}

impl HashChain {
    pub fn update(&mut self, value: Felt) {
        self.hash = pedersen_hash(self.hash, value);
        self.count += 1;
    }

    pub fn chain_update(mut self, value: Felt) -> Self {
        self.update(value);
        self
    }

    pub fn finalize(self) -> Felt {
        pedersen_hash(self.hash, Felt::from(self.count))
    }
}

/// Hashes a sequence of elements with a [HashChain], binding the length.
pub fn compute_hash_on_elements(elements: &[Felt]) -> Felt {
    elements
        .iter()
        .fold(HashChain::default(), |chain, &x| chain.chain_update(x))
        .finalize()
}
