//! `EnvelopePublicKey` - Recipient public key.
//!
//! This module provides the `EnvelopePublicKey` type used to seal envelopes.
//!
//! Text form: `base64(SubjectPublicKeyInfo DER)`, standard alphabet with
//! padding. Only `rsaEncryption` keys with a modulus between
//! [`MIN_MODULUS_BITS`](crate::core::types::MIN_MODULUS_BITS) and
//! [`MAX_MODULUS_BITS`](crate::core::types::MAX_MODULUS_BITS) bits are
//! accepted. Generic PKIX parsers take RSA keys of any size, so a short key
//! that decodes elsewhere is rejected here.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use rand_core::CryptoRngCore;
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::hybrid::seal_envelope;
use crate::core::types::{Envelope, MAX_MODULUS_BITS, MIN_MODULUS_BITS};

/// An RSA public key that envelopes are sealed to.
///
/// # Example
///
/// ```rust
/// use hybrid_envelope::core::types::{EnvelopePublicKey, generate_key_pair};
///
/// let pair = generate_key_pair()?;
/// let public_key = EnvelopePublicKey::try_from(pair.public_key())?;
/// assert_eq!(public_key.modulus_bits(), 2048);
/// assert_eq!(public_key.to_string(), pair.public_key());
/// # Ok::<(), hybrid_envelope::EnvelopeError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EnvelopePublicKey {
    key: RsaPublicKey,
}

impl EnvelopePublicKey {
    /// Wraps an RSA public key, enforcing the accepted modulus range.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyFormat` if the modulus is below
    /// [`MIN_MODULUS_BITS`] or above [`MAX_MODULUS_BITS`].
    pub fn new(key: RsaPublicKey) -> EnvelopeResult<Self> {
        if !(MIN_MODULUS_BITS..=MAX_MODULUS_BITS).contains(&key.n().bits()) {
            return Err(EnvelopeError::KeyFormat);
        }
        Ok(Self { key })
    }

    /// Returns the underlying RSA key.
    #[must_use]
    pub const fn as_rsa(&self) -> &RsaPublicKey {
        &self.key
    }

    /// Returns the modulus size in bits.
    #[must_use]
    pub fn modulus_bits(&self) -> usize {
        self.key.n().bits()
    }

    /// Returns the modulus size in bytes.
    ///
    /// This is also the exact length of every key wrapped under this key.
    #[must_use]
    pub fn size(&self) -> usize {
        self.key.size()
    }

    /// Returns the SubjectPublicKeyInfo DER encoding.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyFormat` if the key cannot be encoded.
    pub fn to_der(&self) -> EnvelopeResult<Vec<u8>> {
        self.key
            .to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|_| EnvelopeError::KeyFormat)
    }

    /// Parses a SubjectPublicKeyInfo DER encoding.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::KeyFormat` if the structure is malformed,
    /// describes a non-RSA key, or the modulus is too small.
    pub fn from_der(der: &[u8]) -> EnvelopeResult<Self> {
        let key = RsaPublicKey::from_public_key_der(der).map_err(|_| EnvelopeError::KeyFormat)?;
        Self::new(key)
    }

    /// Seals `plaintext` to this key.
    ///
    /// A fresh session key and nonce are drawn from `rng` for every call.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::Encapsulation` if `rng` fails or the key is
    /// rejected by RSA-OAEP.
    pub fn seal<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> EnvelopeResult<Envelope> {
        seal_envelope(rng, &self.key, plaintext)
    }
}

impl TryFrom<RsaPublicKey> for EnvelopePublicKey {
    type Error = EnvelopeError;

    fn try_from(key: RsaPublicKey) -> Result<Self, Self::Error> {
        Self::new(key)
    }
}

// =============================================================================
// Display (serialization to base64 text)
// =============================================================================

impl Display for EnvelopePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let der = self.to_der().map_err(|_| fmt::Error)?;
        f.write_str(&BASE64_STANDARD.encode(der))
    }
}

impl Debug for EnvelopePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopePublicKey")
            .field("modulus_bits", &self.modulus_bits())
            .finish()
    }
}

// =============================================================================
// TryFrom (parsing from base64 text)
// =============================================================================

impl TryFrom<&str> for EnvelopePublicKey {
    type Error = EnvelopeError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let der = BASE64_STANDARD
            .decode(encoded)
            .map_err(|_| EnvelopeError::KeyFormat)?;
        Self::from_der(&der)
    }
}

impl TryFrom<String> for EnvelopePublicKey {
    type Error = EnvelopeError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}
