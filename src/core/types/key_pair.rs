//! Key pair generation and the text encodings of both halves.

use core::fmt::{self, Debug};

use rand_core::{CryptoRngCore, OsRng};
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::types::{EnvelopePrivateKey, EnvelopePublicKey};

/// Smallest RSA modulus accepted for generation and decoding.
pub const MIN_MODULUS_BITS: usize = 2048;

/// Largest RSA modulus accepted for generation.
///
/// Public keys above this size do not decode, so a larger pair could not
/// be used to seal anything.
pub const MAX_MODULUS_BITS: usize = RsaPublicKey::MAX_SIZE;

/// Modulus size used by [`generate_key_pair`].
pub const DEFAULT_MODULUS_BITS: usize = 2048;

/// A freshly generated key pair in its transport text form.
///
/// The public half is SubjectPublicKeyInfo DER, the private half PKCS#1
/// `RSAPrivateKey` DER; both are standard base64.
#[derive(Clone)]
pub struct EncodedKeyPair {
    public_key: String,
    private_key: Zeroizing<String>,
}

impl EncodedKeyPair {
    /// Returns the base64 public key.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Returns the base64 private key.
    #[must_use]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Splits the pair into `(public_key, private_key)`.
    #[must_use]
    pub fn into_parts(self) -> (String, Zeroizing<String>) {
        (self.public_key, self.private_key)
    }
}

impl Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Generates a 2048-bit key pair using the operating system generator.
///
/// # Errors
///
/// Returns `EnvelopeError::KeyGeneration` if the generator is unavailable.
pub fn generate_key_pair() -> EnvelopeResult<EncodedKeyPair> {
    generate_key_pair_with_rng(&mut OsRng, DEFAULT_MODULUS_BITS)
}

/// Generates a key pair of `modulus_bits` bits from `rng`.
///
/// # Errors
///
/// Returns `EnvelopeError::KeyGeneration` if `modulus_bits` is outside
/// [`MIN_MODULUS_BITS`]..=[`MAX_MODULUS_BITS`], the size is rejected by the
/// RSA implementation, or `rng` fails.
pub fn generate_key_pair_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    modulus_bits: usize,
) -> EnvelopeResult<EncodedKeyPair> {
    if !(MIN_MODULUS_BITS..=MAX_MODULUS_BITS).contains(&modulus_bits) {
        return Err(EnvelopeError::KeyGeneration);
    }

    // Prime search only uses the infallible interface, so check the
    // generator up front.
    let mut sample = Zeroizing::new([0u8; 32]);
    rng.try_fill_bytes(&mut sample[..])
        .map_err(|_| EnvelopeError::KeyGeneration)?;

    let key = RsaPrivateKey::new(rng, modulus_bits).map_err(|_| EnvelopeError::KeyGeneration)?;
    let private_key = EnvelopePrivateKey::new(key).map_err(|_| EnvelopeError::KeyGeneration)?;
    let public_key = private_key
        .public_key()
        .map_err(|_| EnvelopeError::KeyGeneration)?;

    let pair = EncodedKeyPair {
        public_key: public_key.to_string(),
        private_key: private_key
            .to_encoded()
            .map_err(|_| EnvelopeError::KeyGeneration)?,
    };

    tracing::debug!(modulus_bits, "generated key pair");
    Ok(pair)
}

/// Parses a base64 SubjectPublicKeyInfo RSA public key.
///
/// # Errors
///
/// Returns `EnvelopeError::KeyFormat` on malformed base64, malformed DER,
/// a non-RSA key, a modulus below [`MIN_MODULUS_BITS`], or a modulus above
/// [`MAX_MODULUS_BITS`].
///
/// The lower bound is stricter than most PKIX parsers, which accept RSA
/// keys of any size. Keys under 2048 bits produced elsewhere will not
/// decode here.
pub fn decode_public(encoded: &str) -> EnvelopeResult<EnvelopePublicKey> {
    EnvelopePublicKey::try_from(encoded)
}

/// Parses a base64 PKCS#1 RSA private key.
///
/// # Errors
///
/// Returns `EnvelopeError::KeyFormat` on malformed base64, malformed DER,
/// or a modulus outside [`MIN_MODULUS_BITS`]..=[`MAX_MODULUS_BITS`].
pub fn decode_private(encoded: &str) -> EnvelopeResult<EnvelopePrivateKey> {
    EnvelopePrivateKey::try_from(encoded)
}
