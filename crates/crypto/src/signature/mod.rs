mod ecdsa;

pub use ecdsa::{
    ecdsa_sign, ecdsa_sign_k, ecdsa_verify, ecdsa_verify_inner, ecdsa_verify_partial, get_pk,
    get_pk_full, get_pk_point, SignatureError,
};
