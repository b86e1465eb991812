//! Payload cipher: AES-256-GCM under a one-time session key.
//!
//! No associated data is bound. Nonce uniqueness is the caller's job; the
//! envelope layer gets it for free because every session key is used for
//! exactly one message.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use rand_core::CryptoRngCore;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::types::SessionKey;

/// Nonce size for AES-GCM (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size for AES-GCM.
pub const TAG_SIZE: usize = 16;

/// Draws a fresh nonce from `rng`.
///
/// # Errors
///
/// Returns `EnvelopeError::Encapsulation` if the generator fails.
pub fn generate_nonce<R: CryptoRngCore>(rng: &mut R) -> EnvelopeResult<[u8; NONCE_SIZE]> {
    let mut nonce = [0u8; NONCE_SIZE];
    rng.try_fill_bytes(&mut nonce)
        .map_err(|_| EnvelopeError::Encapsulation)?;
    Ok(nonce)
}

/// Encrypts `plaintext` and appends the authentication tag.
///
/// The output is exactly `plaintext.len() + TAG_SIZE` bytes. Identical
/// inputs give identical outputs.
///
/// # Errors
///
/// Returns `EnvelopeError::Encapsulation` if the plaintext exceeds the
/// AES-GCM length limit.
pub fn seal(
    key: &SessionKey,
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
) -> EnvelopeResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| EnvelopeError::Encapsulation)
}

/// Verifies the tag and decrypts.
///
/// Nothing is returned unless the tag verifies.
///
/// # Errors
///
/// Returns `EnvelopeError::Authentication` on a wrong key, wrong nonce,
/// modified or truncated ciphertext.
pub fn open(
    key: &SessionKey,
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
) -> EnvelopeResult<Vec<u8>> {
    if ciphertext.len() < TAG_SIZE {
        return Err(EnvelopeError::Authentication);
    }
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| EnvelopeError::Authentication)
}
