//! `EnvelopePrivateKey` - Recipient private key.
//!
//! This module provides the `EnvelopePrivateKey` type used to open envelopes.
//!
//! Text form: `base64(PKCS#1 RSAPrivateKey DER)`, standard alphabet with
//! padding. PKCS#8-wrapped keys are not accepted.

use core::fmt::{self, Debug};

use base64::prelude::*;
use rand_core::CryptoRngCore;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use zeroize::Zeroizing;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::hybrid::open_envelope;
use crate::core::types::{Envelope, EnvelopePublicKey, MAX_MODULUS_BITS, MIN_MODULUS_BITS};

/// An RSA private key that opens envelopes sealed to its public half.
///
/// # Security
///
/// - Key material is zeroized on drop (by the underlying `rsa` key)
/// - Debug output redacts the key
/// - The text encoding is only handed out inside [`Zeroizing`]
///
/// # Example
///
/// ```rust
/// use hybrid_envelope::core::types::{EnvelopePrivateKey, generate_key_pair};
///
/// let pair = generate_key_pair()?;
/// let private_key = EnvelopePrivateKey::try_from(pair.private_key())?;
/// assert_eq!(private_key.public_key()?.to_string(), pair.public_key());
/// # Ok::<(), hybrid_envelope::EnvelopeError>(())
/// ```
#[derive(Clone)]
pub struct EnvelopePrivateKey {
    key: RsaPrivateKey,
}

impl EnvelopePrivateKey {
    /// Wraps an RSA private key, enforcing the accepted modulus range.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyFormat` if the modulus is below
    /// [`MIN_MODULUS_BITS`] or above [`MAX_MODULUS_BITS`].
    pub fn new(key: RsaPrivateKey) -> EnvelopeResult<Self> {
        if !(MIN_MODULUS_BITS..=MAX_MODULUS_BITS).contains(&key.n().bits()) {
            return Err(EnvelopeError::KeyFormat);
        }
        Ok(Self { key })
    }

    /// Returns the underlying RSA key.
    #[must_use]
    pub const fn as_rsa(&self) -> &RsaPrivateKey {
        &self.key
    }

    /// Returns the modulus size in bits.
    #[must_use]
    pub fn modulus_bits(&self) -> usize {
        self.key.n().bits()
    }

    /// Returns the modulus size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.key.size()
    }

    /// Derives the matching public key.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyFormat` if the public half is rejected,
    /// which cannot happen for a key that passed [`Self::new`].
    pub fn public_key(&self) -> EnvelopeResult<EnvelopePublicKey> {
        EnvelopePublicKey::new(self.key.to_public_key())
    }

    /// Returns the PKCS#1 DER encoding.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyFormat` if the key cannot be encoded.
    pub fn to_der(&self) -> EnvelopeResult<Zeroizing<Vec<u8>>> {
        self.key
            .to_pkcs1_der()
            .map(|doc| Zeroizing::new(doc.as_bytes().to_vec()))
            .map_err(|_| EnvelopeError::KeyFormat)
    }

    /// Returns the base64 text encoding.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyFormat` if the key cannot be encoded.
    pub fn to_encoded(&self) -> EnvelopeResult<Zeroizing<String>> {
        let der = self.to_der()?;
        Ok(Zeroizing::new(BASE64_STANDARD.encode(der.as_slice())))
    }

    /// Parses a PKCS#1 DER encoding.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyFormat` if the structure is malformed or
    /// the modulus is too small.
    pub fn from_der(der: &[u8]) -> EnvelopeResult<Self> {
        let key = RsaPrivateKey::from_pkcs1_der(der).map_err(|_| EnvelopeError::KeyFormat)?;
        Self::new(key)
    }

    /// Opens an envelope sealed to this key's public half.
    ///
    /// `rng` blinds the private-key operation.
    ///
    /// # Errors
    ///
    /// Returns an error for which [`EnvelopeError::is_open_failure`] holds
    /// if the envelope was not sealed to this key or was modified.
    pub fn open<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        envelope: &Envelope,
    ) -> EnvelopeResult<Vec<u8>> {
        open_envelope(rng, &self.key, envelope)
    }
}

impl TryFrom<RsaPrivateKey> for EnvelopePrivateKey {
    type Error = EnvelopeError;

    fn try_from(key: RsaPrivateKey) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for EnvelopePrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopePrivateKey")
            .field("modulus_bits", &self.modulus_bits())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// TryFrom (parsing from base64 text)
// =============================================================================

impl TryFrom<&str> for EnvelopePrivateKey {
    type Error = EnvelopeError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let der = BASE64_STANDARD
            .decode(encoded)
            .map(Zeroizing::new)
            .map_err(|_| EnvelopeError::KeyFormat)?;
        Self::from_der(&der)
    }
}

impl TryFrom<String> for EnvelopePrivateKey {
    type Error = EnvelopeError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        let encoded = Zeroizing::new(encoded);
        Self::try_from(encoded.as_str())
    }
}
