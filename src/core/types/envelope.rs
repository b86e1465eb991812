//! `Envelope` - The sealed message and its wire format.
//!
//! Byte layout, before base64url (no padding) encoding:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | `L`, big-endian length of the wrapped key |
//! | 4 | `L` | RSA-OAEP ciphertext of the session key |
//! | 4 + `L` | 12 | AES-GCM nonce |
//! | 16 + `L` | rest | AES-GCM ciphertext followed by the 16-byte tag |
//!
//! The format carries no version marker, so a change of cipher suite needs
//! a new framing.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::operations::aead::NONCE_SIZE;

/// Size of the big-endian wrapped-key length prefix.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// A sealed message: wrapped session key, nonce, and authenticated ciphertext.
///
/// Envelopes are immutable once built. Use [`Display`] to obtain the
/// base64url text and `TryFrom<&str>` to parse it back.
///
/// # Example
///
/// ```rust
/// use hybrid_envelope::core::types::Envelope;
///
/// let envelope = Envelope::new(vec![0xAA; 256], [0x01; 12], vec![0xBB; 16])?;
/// let text = envelope.to_string();
///
/// let parsed = Envelope::try_from(text.as_str())?;
/// assert_eq!(parsed, envelope);
/// assert_eq!(parsed.wrapped_key().len(), 256);
/// # Ok::<(), hybrid_envelope::EnvelopeError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    /// The RSA-OAEP ciphertext of the session key.
    wrapped_key: Vec<u8>,
    /// The AES-GCM nonce.
    nonce: [u8; NONCE_SIZE],
    /// The AES-GCM ciphertext with the tag appended.
    ciphertext: Vec<u8>,
}

impl Envelope {
    /// Creates an envelope from its three wire fields.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::EnvelopeFormat` if the wrapped key is too
    /// long for the 32-bit length prefix.
    pub fn new(
        wrapped_key: Vec<u8>,
        nonce: [u8; NONCE_SIZE],
        ciphertext: Vec<u8>,
    ) -> EnvelopeResult<Self> {
        if u32::try_from(wrapped_key.len()).is_err() {
            return Err(EnvelopeError::EnvelopeFormat);
        }
        Ok(Self {
            wrapped_key,
            nonce,
            ciphertext,
        })
    }

    /// Returns the wrapped session key.
    #[must_use]
    pub fn wrapped_key(&self) -> &[u8] {
        &self.wrapped_key
    }

    /// Returns the nonce.
    #[must_use]
    pub const fn nonce(&self) -> &[u8; NONCE_SIZE] {
        &self.nonce
    }

    /// Returns the ciphertext including the authentication tag.
    #[must_use]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Consumes the envelope and returns `(wrapped_key, nonce, ciphertext)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, [u8; NONCE_SIZE], Vec<u8>) {
        (self.wrapped_key, self.nonce, self.ciphertext)
    }

    /// Returns the length of the serialized byte form.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.wrapped_key.len() + NONCE_SIZE + self.ciphertext.len()
    }

    /// Serializes the envelope to its byte layout.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        // `new` guarantees the length fits in a u32.
        let prefix = (self.wrapped_key.len() as u32).to_be_bytes();

        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&prefix);
        out.extend_from_slice(&self.wrapped_key);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parses the byte layout.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::EnvelopeFormat` if the length prefix is
    /// missing, the declared wrapped-key length overruns the buffer, or
    /// fewer than 12 bytes remain for the nonce.
    pub fn from_bytes(bytes: &[u8]) -> EnvelopeResult<Self> {
        if bytes.len() < LENGTH_PREFIX_SIZE {
            return Err(EnvelopeError::EnvelopeFormat);
        }
        let (prefix, rest) = bytes.split_at(LENGTH_PREFIX_SIZE);

        let mut len_bytes = [0u8; LENGTH_PREFIX_SIZE];
        len_bytes.copy_from_slice(prefix);
        let wrapped_len = usize::try_from(u32::from_be_bytes(len_bytes))
            .map_err(|_| EnvelopeError::EnvelopeFormat)?;

        if wrapped_len > rest.len() {
            return Err(EnvelopeError::EnvelopeFormat);
        }
        let (wrapped_key, rest) = rest.split_at(wrapped_len);

        if rest.len() < NONCE_SIZE {
            return Err(EnvelopeError::EnvelopeFormat);
        }
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(nonce_bytes);

        Ok(Self {
            wrapped_key: wrapped_key.to_vec(),
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }
}

/// Frames the three wire fields and returns the base64url text.
///
/// # Errors
///
/// Returns `EnvelopeError::EnvelopeFormat` if the wrapped key is too long
/// for the length prefix.
pub fn encode(
    wrapped_key: &[u8],
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
) -> EnvelopeResult<String> {
    Envelope::new(wrapped_key.to_vec(), *nonce, ciphertext.to_vec()).map(|e| e.to_string())
}

/// Parses base64url text into `(wrapped_key, nonce, ciphertext)`.
///
/// # Errors
///
/// Returns `EnvelopeError::EnvelopeFormat` if the text or the framing is
/// malformed.
pub fn decode(encoded: &str) -> EnvelopeResult<(Vec<u8>, [u8; NONCE_SIZE], Vec<u8>)> {
    Envelope::try_from(encoded).map(Envelope::into_parts)
}

// =============================================================================
// Display (serialization to base64url text)
// =============================================================================

impl Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64_URL_SAFE_NO_PAD.encode(self.to_bytes()))
    }
}

impl Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("wrapped_key_len", &self.wrapped_key.len())
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

// =============================================================================
// TryFrom (parsing from base64url text)
// =============================================================================

impl TryFrom<&str> for Envelope {
    type Error = EnvelopeError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let bytes = BASE64_URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| EnvelopeError::EnvelopeFormat)?;
        Self::from_bytes(&bytes)
    }
}

impl TryFrom<String> for Envelope {
    type Error = EnvelopeError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl TryFrom<&[u8]> for Envelope {
    type Error = EnvelopeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}
