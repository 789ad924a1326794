//! The domain separated message hash an account checks signatures against.
//!
//! All three layers use `compute_hash_on_elements`, so each list is bound to its length.
use multicall_common::{felt, ContractAddress, Fee, TransactionNonce, TransactionVersion};
use multicall_crypto::hash::compute_hash_on_elements;
use multicall_crypto::Felt;

use crate::call::Call;

/// `"StarkNet Transaction"` packed into a field element.
pub const DOMAIN_TAG: Felt = felt!("0x537461726b4e6574205472616e73616374696f6e");

/// The version signed into every multicall unless stated otherwise.
pub const TRANSACTION_VERSION: TransactionVersion = TransactionVersion::ZERO;

/// `H(target, selector, H(calldata))`
pub fn hash_call(call: &Call) -> Felt {
    let calldata = call.calldata().iter().map(|p| p.0).collect::<Vec<_>>();
    compute_hash_on_elements(&[
        call.target().0,
        call.selector().0,
        compute_hash_on_elements(&calldata),
    ])
}

/// `H(hash_call(c_0), .., hash_call(c_n))`, order sensitive.
pub fn hash_calls(calls: &[Call]) -> Felt {
    let hashes = calls.iter().map(hash_call).collect::<Vec<_>>();
    compute_hash_on_elements(&hashes)
}

/// `H(DOMAIN_TAG, sender, calls_hash, nonce, max_fee, version)`
pub fn hash_message(
    sender: ContractAddress,
    calls_hash: Felt,
    nonce: TransactionNonce,
    max_fee: Fee,
    version: TransactionVersion,
) -> Felt {
    compute_hash_on_elements(&[
        DOMAIN_TAG,
        sender.0,
        calls_hash,
        nonce.0,
        max_fee.0,
        version.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use multicall_common::macro_prelude::*;
    use multicall_common::{encode_text_as_integer, CallParam, EntryPoint};
    use pretty_assertions_sorted::assert_eq;

    fn transfer() -> Call {
        Call::to_method(
            contract_address!("0xaa"),
            "transfer",
            vec![call_param!("0x1"), call_param!("0x64")],
        )
    }

    #[test]
    fn domain_tag() {
        assert_eq!(encode_text_as_integer("StarkNet Transaction").unwrap(), DOMAIN_TAG);
    }

    #[test]
    fn golden_scenario() {
        let call = transfer();
        assert_eq!(
            call.selector(),
            entry_point!("0x83afd3f4caedc6eebf44246fe54e38c95e3179a5ec9ea81740eca5b482d12e")
        );

        let call_hash = hash_call(&call);
        assert_eq!(
            call_hash,
            felt!("0x1d9e676db8ffa40eae4999fd3fe5ac3cacf353dd272443e646dfac97c5eaae5")
        );

        let calls_hash = hash_calls(&[call]);
        assert_eq!(
            calls_hash,
            felt!("0x4273e86d9df766070eb2144cce5b9fa3ce802f472bdd1aeef574429055a7570")
        );

        let message = hash_message(
            contract_address!("0x123"),
            calls_hash,
            TransactionNonce::ZERO,
            Fee::ZERO,
            TRANSACTION_VERSION,
        );
        assert_eq!(
            message,
            felt!("0x4fe04a40089655fc631dd02c913f2f4bf3239be59d24ce2ab161e3c712e42bf")
        );
    }

    #[test]
    fn version_is_domain_separating() {
        let calls_hash = hash_calls(&[transfer()]);
        let sender = contract_address!("0x123");
        let v0 = hash_message(sender, calls_hash, TransactionNonce::ZERO, Fee::ZERO, TransactionVersion::ZERO);
        let v1 = hash_message(sender, calls_hash, TransactionNonce::ZERO, Fee::ZERO, TransactionVersion::ONE);
        assert_ne!(v0, v1);
        assert_eq!(
            v1,
            felt!("0x77ba0bd55dea46c0616afdf1c920c6937c3703e3f553ef35797d3af4cae55e9")
        );
    }

    #[test]
    fn order_sensitive() {
        let a = transfer();
        let b = Call::to_method(contract_address!("0xbb"), "approve", vec![call_param!("0x2")]);
        assert_ne!(
            hash_calls(&[a.clone(), b.clone()]),
            hash_calls(&[b, a])
        );
    }

    #[test]
    fn argument_boundaries_are_bound() {
        // Moving an argument from one call to the next changes the hash even
        // though the concatenated calldata is the same.
        let target = contract_address!("0xaa");
        let selector = EntryPoint::hashed(b"f");
        let one = CallParam(Felt::ONE);
        let left = [
            Call::new(target, selector, vec![one, one]),
            Call::new(target, selector, vec![]),
        ];
        let right = [
            Call::new(target, selector, vec![one]),
            Call::new(target, selector, vec![one]),
        ];
        assert_ne!(hash_calls(&left), hash_calls(&right));
    }

    #[test]
    fn every_message_field_is_bound() {
        let calls_hash = hash_calls(&[transfer()]);
        let base = hash_message(
            contract_address!("0x123"),
            calls_hash,
            TransactionNonce::ZERO,
            Fee::ZERO,
            TRANSACTION_VERSION,
        );
        let variants = [
            hash_message(contract_address!("0x124"), calls_hash, TransactionNonce::ZERO, Fee::ZERO, TRANSACTION_VERSION),
            hash_message(contract_address!("0x123"), Felt::ONE, TransactionNonce::ZERO, Fee::ZERO, TRANSACTION_VERSION),
            hash_message(contract_address!("0x123"), calls_hash, TransactionNonce::new(1), Fee::ZERO, TRANSACTION_VERSION),
            hash_message(contract_address!("0x123"), calls_hash, TransactionNonce::ZERO, Fee::new(1), TRANSACTION_VERSION),
        ];
        for variant in variants {
            assert_ne!(base, variant);
        }
    }
}
