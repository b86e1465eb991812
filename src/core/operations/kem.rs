//! Key encapsulation: RSA-OAEP (SHA-256, MGF1-SHA-256, empty label).
//!
//! A fresh 32-byte session key is drawn and encrypted under the recipient's
//! public key. The wrapped key is always exactly the modulus size in bytes.
//!
//! # Security
//!
//! Unwrapping never reports why it failed. Bad padding, a wrong key and a
//! wrong length all map to `EnvelopeError::Decapsulation`. The private-key
//! operation is blinded with the caller's generator.

use rand_core::CryptoRngCore;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::types::SessionKey;

/// Wraps a freshly generated session key under `public_key`.
///
/// # Returns
///
/// A tuple of (`session_key`, `wrapped_key`), where `wrapped_key` is
/// `public_key.size()` bytes long.
///
/// # Errors
///
/// Returns `EnvelopeError::Encapsulation` if `rng` fails or RSA-OAEP
/// rejects the key.
pub fn wrap<R: CryptoRngCore>(
    rng: &mut R,
    public_key: &RsaPublicKey,
) -> EnvelopeResult<(SessionKey, Vec<u8>)> {
    let session_key = SessionKey::generate(rng)?;
    let wrapped_key = public_key
        .encrypt(rng, Oaep::new::<Sha256>(), session_key.as_bytes())
        .map_err(|_| EnvelopeError::Encapsulation)?;

    Ok((session_key, wrapped_key))
}

/// Recovers the session key from `wrapped_key`.
///
/// # Errors
///
/// Returns `EnvelopeError::Decapsulation` for every failure.
pub fn unwrap<R: CryptoRngCore>(
    rng: &mut R,
    private_key: &RsaPrivateKey,
    wrapped_key: &[u8],
) -> EnvelopeResult<SessionKey> {
    if wrapped_key.len() != private_key.size() {
        return Err(EnvelopeError::Decapsulation);
    }

    let decrypted = private_key
        .decrypt_blinded(rng, Oaep::new::<Sha256>(), wrapped_key)
        .map(Zeroizing::new)
        .map_err(|_| EnvelopeError::Decapsulation)?;

    SessionKey::from_slice(&decrypted)
}
