//! `SessionKey` - One-time symmetric key.
//!
//! A session key is drawn fresh for every sealed envelope, wrapped under the
//! recipient's public key, and dropped as soon as the payload has been sealed
//! or opened. It is never serialized on its own.

use core::fmt::{self, Debug};

use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{EnvelopeError, EnvelopeResult};

/// Size of a session key in bytes (AES-256).
pub const SESSION_KEY_SIZE: usize = 32;

/// An ephemeral 256-bit symmetric key.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
/// - Not `Clone`: each key lives for exactly one seal or open call
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKey {
    key: [u8; SESSION_KEY_SIZE],
}

impl SessionKey {
    /// Draws a fresh key from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::Encapsulation` if the generator fails.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R) -> EnvelopeResult<Self> {
        let mut key = [0u8; SESSION_KEY_SIZE];
        if rng.try_fill_bytes(&mut key).is_err() {
            key.zeroize();
            return Err(EnvelopeError::Encapsulation);
        }
        Ok(Self { key })
    }

    /// Copies a key out of a decrypted buffer.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError::Decapsulation` if the buffer is not exactly
    /// [`SESSION_KEY_SIZE`] bytes.
    pub(crate) fn from_slice(bytes: &[u8]) -> EnvelopeResult<Self> {
        if bytes.len() != SESSION_KEY_SIZE {
            return Err(EnvelopeError::Decapsulation);
        }
        let mut key = [0u8; SESSION_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self { key })
    }

    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SESSION_KEY_SIZE] {
        &self.key
    }
}

impl From<[u8; SESSION_KEY_SIZE]> for SessionKey {
    fn from(key: [u8; SESSION_KEY_SIZE]) -> Self {
        Self { key }
    }
}

impl AsRef<[u8]> for SessionKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for SessionKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for SessionKey {}
