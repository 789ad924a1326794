use multicall_common::{PublicKey, TransactionSignatureElem};
use multicall_crypto::signature::{
    ecdsa_sign, ecdsa_sign_k, ecdsa_verify_partial, get_pk_full, SignatureError,
};
use multicall_crypto::{AffinePoint, CurveOrderFieldElement, Felt};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret scalar bytes, cleared when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Secret([u8; 32]);

impl Secret {
    fn new(secret: Felt) -> Self {
        Self(secret.to_be_bytes())
    }

    fn felt(&self) -> Felt {
        Felt::from_be_bytes(self.0).expect("Secret bytes are always taken from a Felt")
    }
}

/// A STARK curve private key together with its public key.
pub struct SigningKey {
    secret: Secret,
    public_key: PublicKey,
    public_point: AffinePoint,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Fails with [SignatureError::SecretKey] unless `1 <= secret < n`.
    pub fn from_secret(secret: Felt) -> Result<Self, SignatureError> {
        let public_point = get_pk_full(secret).ok_or(SignatureError::SecretKey)?;
        Ok(Self {
            secret: Secret::new(secret),
            public_key: PublicKey(public_point.x_felt()),
            public_point,
        })
    }

    /// Derives a key from a seed by reducing it into the curve order.
    pub fn from_seed(seed: Felt) -> Result<Self, SignatureError> {
        Self::from_secret(CurveOrderFieldElement::reduce_felt(seed).to_felt())
    }

    pub fn random() -> Self {
        let rng = &mut rand::thread_rng();
        loop {
            if let Ok(key) = Self::from_secret(Felt::random(&mut *rng)) {
                return key;
            }
        }
    }

    /// The x-coordinate of the public point, as registered with the account.
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    pub fn public_point(&self) -> AffinePoint {
        self.public_point
    }

    /// Signs `hash` with fresh randomness.
    pub fn sign(&self, hash: Felt) -> Result<Signature, SignatureError> {
        let (r, s) = ecdsa_sign(self.secret.felt(), hash)?;
        Ok(Signature::new(r, s))
    }

    /// Signs `hash` with explicit randomness `k`.
    ///
    /// Reusing `k` for two different hashes reveals the key.
    pub fn sign_with_k(&self, hash: Felt, k: Felt) -> Result<Signature, SignatureError> {
        let (r, s) = ecdsa_sign_k(self.secret.felt(), hash, k)?;
        Ok(Signature::new(r, s))
    }
}

/// An ECDSA signature `(r, s)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Signature {
    pub r: TransactionSignatureElem,
    pub s: TransactionSignatureElem,
}

impl Signature {
    pub fn new(r: Felt, s: Felt) -> Self {
        Self {
            r: TransactionSignatureElem(r),
            s: TransactionSignatureElem(s),
        }
    }

    /// Checks the signature over `hash` against an x-only public key.
    pub fn verify(&self, public_key: PublicKey, hash: Felt) -> Result<(), SignatureError> {
        ecdsa_verify_partial(public_key.0, hash, self.r.0, self.s.0)
    }

    /// The signature as the transaction signature vector `[r, s]`.
    pub fn to_vec(&self) -> Vec<TransactionSignatureElem> {
        vec![self.r, self.s]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use multicall_common::felt;
    use pretty_assertions_sorted::assert_eq;

    const SECRET: Felt = felt!("0x03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc");

    #[test]
    fn public_key() {
        let key = SigningKey::from_secret(SECRET).unwrap();
        assert_eq!(
            key.public_key(),
            PublicKey(felt!("0x77a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"))
        );
        assert_eq!(
            key.public_point().y_felt(),
            felt!("0x54d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06")
        );
    }

    #[test]
    fn invalid_secrets() {
        assert_matches!(SigningKey::from_secret(Felt::ZERO), Err(SignatureError::SecretKey));
        let order = multicall_crypto::algebra::curve::CURVE_ORDER;
        assert_matches!(SigningKey::from_secret(order), Err(SignatureError::SecretKey));
        // Seeds are reduced, so the order itself maps to zero.
        assert_matches!(SigningKey::from_seed(order), Err(SignatureError::SecretKey));
        assert_eq!(
            SigningKey::from_seed(order + Felt::ONE).unwrap().public_key(),
            SigningKey::from_secret(Felt::ONE).unwrap().public_key()
        );
    }

    #[test]
    fn sign_and_verify() {
        let key = SigningKey::random();
        let hash = felt!("0x4fe04a40089655fc631dd02c913f2f4bf3239be59d24ce2ab161e3c712e42bf");
        let signature = key.sign(hash).unwrap();
        assert_eq!(signature.verify(key.public_key(), hash), Ok(()));
        assert_eq!(
            signature.verify(key.public_key(), hash + Felt::ONE),
            Err(SignatureError::Signature)
        );
    }

    #[test]
    fn explicit_randomness_is_deterministic() {
        let key = SigningKey::from_secret(SECRET).unwrap();
        let hash = felt!("0x4fe04a40089655fc631dd02c913f2f4bf3239be59d24ce2ab161e3c712e42bf");
        let k = Felt::from_u64(0x2a);
        let signature = key.sign_with_k(hash, k).unwrap();
        assert_eq!(signature, key.sign_with_k(hash, k).unwrap());
        assert_eq!(
            signature,
            Signature::new(
                felt!("0x4219d1d981f872e3eabff54aca21110546964ec2699d4229ca0ecba76c70bb"),
                felt!("0x3de76c6fa70a576c4fd004f87d73cd8cd30480efa3484242913c6961e31b84"),
            )
        );
        assert_eq!(signature.to_vec(), vec![signature.r, signature.s]);
    }

    #[test]
    fn secret_keeps_its_value() {
        // n - 1
        let largest = felt!("0x800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2e");
        assert_eq!(Secret::new(largest).felt(), largest);
        assert_eq!(Secret::new(SECRET).felt(), SECRET);

        let key = SigningKey::from_secret(largest).unwrap();
        let hash = Felt::from_u64(1);
        assert_eq!(key.sign(hash).unwrap().verify(key.public_key(), hash), Ok(()));
    }

    #[test]
    fn debug_hides_secret() {
        let key = SigningKey::from_secret(SECRET).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("public_key"));
        assert!(!debug.to_lowercase().contains("3c1e9550e669"));
    }
}
