//! Hybrid encryption: RSA-OAEP key encapsulation plus AES-256-GCM payload.
//!
//! Sealing:
//! 1. Decode the recipient public key
//! 2. Draw and wrap a session key (RSA-OAEP-SHA256)
//! 3. Encrypt the payload under a fresh nonce (AES-256-GCM)
//! 4. Frame and base64url-encode
//!
//! Opening runs the same steps in reverse. Every step's error is returned
//! unchanged. On the open path those errors all render the same message, and
//! the failing stage is only recorded in a `debug` event.

use rand_core::{CryptoRngCore, OsRng};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::{aead, kem};
use crate::core::types::{decode_private, decode_public, Envelope};

/// Seals `plaintext` to `public_key`.
///
/// # Errors
///
/// Returns `EnvelopeError::Encapsulation` if `rng` fails or the key is
/// rejected.
pub(crate) fn seal_envelope<R: CryptoRngCore>(
    rng: &mut R,
    public_key: &RsaPublicKey,
    plaintext: &[u8],
) -> EnvelopeResult<Envelope> {
    let (session_key, wrapped_key) = kem::wrap(rng, public_key)?;
    let nonce = aead::generate_nonce(rng)?;
    let ciphertext = aead::seal(&session_key, &nonce, plaintext)?;
    drop(session_key);

    tracing::debug!(
        payload_len = plaintext.len(),
        wrapped_key_len = wrapped_key.len(),
        "sealed envelope"
    );
    Envelope::new(wrapped_key, nonce, ciphertext)
}

/// Opens `envelope` with `private_key`.
///
/// # Errors
///
/// Returns `EnvelopeError::Decapsulation` or `EnvelopeError::Authentication`.
pub(crate) fn open_envelope<R: CryptoRngCore>(
    rng: &mut R,
    private_key: &RsaPrivateKey,
    envelope: &Envelope,
) -> EnvelopeResult<Vec<u8>> {
    let session_key = kem::unwrap(rng, private_key, envelope.wrapped_key())
        .map_err(|e| rejected("oaep", e))?;

    aead::open(&session_key, envelope.nonce(), envelope.ciphertext())
        .map_err(|e| rejected("aead", e))
}

/// Encrypts `plaintext` to a base64 SubjectPublicKeyInfo RSA key.
///
/// Uses the operating system generator. See [`hybrid_encrypt_with_rng`].
///
/// # Errors
///
/// Returns `EnvelopeError::KeyFormat` if the key cannot be decoded, or
/// `EnvelopeError::Encapsulation` if sealing fails.
pub fn hybrid_encrypt(public_key: &str, plaintext: &[u8]) -> EnvelopeResult<String> {
    hybrid_encrypt_with_rng(&mut OsRng, public_key, plaintext)
}

/// Encrypts `plaintext` to a base64 SubjectPublicKeyInfo RSA key, drawing
/// the session key, nonce and OAEP seed from `rng`.
///
/// # Errors
///
/// Returns `EnvelopeError::KeyFormat` if the key cannot be decoded, or
/// `EnvelopeError::Encapsulation` if sealing fails.
pub fn hybrid_encrypt_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    public_key: &str,
    plaintext: &[u8],
) -> EnvelopeResult<String> {
    let public_key = decode_public(public_key)?;
    let envelope = public_key.seal(rng, plaintext)?;
    Ok(envelope.to_string())
}

/// Decrypts a base64url envelope with a base64 PKCS#1 RSA private key.
///
/// Uses the operating system generator for blinding. See
/// [`hybrid_decrypt_with_rng`].
///
/// # Errors
///
/// Returns `EnvelopeError::KeyFormat` if the key cannot be decoded.
/// Otherwise returns an error for which
/// [`EnvelopeError::is_open_failure`] holds.
pub fn hybrid_decrypt(private_key: &str, envelope: &str) -> EnvelopeResult<Vec<u8>> {
    hybrid_decrypt_with_rng(&mut OsRng, private_key, envelope)
}

/// Decrypts a base64url envelope, blinding the RSA operation with `rng`.
///
/// # Errors
///
/// Returns `EnvelopeError::KeyFormat` if the key cannot be decoded.
/// Otherwise returns an error for which
/// [`EnvelopeError::is_open_failure`] holds.
pub fn hybrid_decrypt_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    private_key: &str,
    envelope: &str,
) -> EnvelopeResult<Vec<u8>> {
    let envelope = Envelope::try_from(envelope).map_err(|e| rejected("frame", e))?;
    let private_key = decode_private(private_key)?;
    private_key.open(rng, &envelope)
}

/// Records which stage rejected an envelope and passes the error through.
fn rejected(stage: &'static str, error: EnvelopeError) -> EnvelopeError {
    tracing::debug!(stage, "rejected envelope");
    error
}
