use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ff::Field;
use multicall_crypto::algebra::curve::CURVE_G;
use multicall_crypto::hash::{compute_hash_on_elements, pedersen_hash};
use multicall_crypto::signature::{ecdsa_sign, ecdsa_verify_partial, get_pk};
use multicall_crypto::{CurveOrderFieldElement, Felt};

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_algebra(c);
    bench_hash(c);
    bench_signature(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn rand_251bit_felt() -> Felt {
    let rng = &mut rand::thread_rng();
    loop {
        let felt = Felt::random(&mut *rng);
        if !felt.has_more_than_251_bits() && !felt.is_zero() {
            return felt;
        }
    }
}

pub fn bench_algebra(c: &mut Criterion) {
    let rng = &mut rand::thread_rng();

    let mut grp_alg = c.benchmark_group("algebra");
    grp_alg.bench_function("generator_mul", |b| {
        b.iter_batched(
            || CurveOrderFieldElement::random(&mut *rng),
            |x| black_box(CURVE_G.multiply_elm(&x)),
            criterion::BatchSize::SmallInput,
        )
    });
    grp_alg.finish();
}

pub fn bench_hash(c: &mut Criterion) {
    let mut grp_hash = c.benchmark_group("hash");
    grp_hash.bench_function("pedersen_hash", |b| {
        b.iter_batched(
            || (rand_251bit_felt(), rand_251bit_felt()),
            |(a, b)| black_box(pedersen_hash(a, b)),
            criterion::BatchSize::SmallInput,
        )
    });
    // A typical single call: target, selector and a handful of arguments.
    grp_hash.bench_function("compute_hash_on_elements_8", |b| {
        b.iter_batched(
            || (0..8).map(|_| rand_251bit_felt()).collect::<Vec<_>>(),
            |elements| black_box(compute_hash_on_elements(&elements)),
            criterion::BatchSize::SmallInput,
        )
    });
    grp_hash.finish();
}

pub fn bench_signature(c: &mut Criterion) {
    let mut grp_sig = c.benchmark_group("signature");
    grp_sig.bench_function("ecdsa_sign", |b| {
        b.iter_batched(
            || (rand_251bit_felt(), rand_251bit_felt()),
            |(sk, z)| black_box(ecdsa_sign(sk, z)),
            criterion::BatchSize::SmallInput,
        )
    });
    grp_sig.bench_function("ecdsa_verify_partial", |b| {
        b.iter_batched(
            || {
                let sk = rand_251bit_felt();
                let z = rand_251bit_felt();
                let (r, s) = ecdsa_sign(sk, z).unwrap();
                let pk = get_pk(sk).unwrap();
                (pk, z, r, s)
            },
            |(pk, z, r, s)| black_box(ecdsa_verify_partial(pk, z, r, s)),
            criterion::BatchSize::SmallInput,
        )
    });
    grp_sig.finish();
}
