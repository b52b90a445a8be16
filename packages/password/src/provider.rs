//! KDF provider: secure randomness and PBKDF2 derivation
//!
//! The hashing and verification logic never touches a primitive directly; it
//! goes through a [`KdfProvider`] so the backend can be swapped or replaced
//! with a deterministic one in tests.

use crate::algorithm::Prf;
use crate::{PasswordError, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::{Sha256, Sha384, Sha512};
use std::num::NonZeroU32;

/// Source of salts and PBKDF2 output
///
/// Implementations must be safe to share across threads; both operations
/// may run concurrently on the same provider.
pub trait KdfProvider: Send + Sync {
    /// Fill `buf` with cryptographically secure random bytes
    ///
    /// # Errors
    ///
    /// Returns `RandomGeneration` if the random source is unavailable.
    fn fill_random(&self, buf: &mut [u8]) -> Result<()>;

    /// Derive `output.len()` bytes with PBKDF2
    ///
    /// # Errors
    ///
    /// Returns `KeyDerivation` if the iteration count is zero or the
    /// backend fails.
    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        prf: Prf,
        output: &mut [u8],
    ) -> Result<()>;
}

/// Default provider backed by the operating system RNG and RustCrypto
/// `pbkdf2`/`sha2`
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl KdfProvider for RustCryptoProvider {
    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|e| PasswordError::RandomGeneration(e.to_string()))
    }

    fn derive(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        prf: Prf,
        output: &mut [u8],
    ) -> Result<()> {
        let iterations = NonZeroU32::new(iterations).ok_or_else(|| {
            PasswordError::KeyDerivation("PBKDF2 iterations must be non-zero".to_string())
        })?;

        match prf {
            Prf::HmacSha256 => pbkdf2_hmac::<Sha256>(password, salt, iterations.get(), output),
            Prf::HmacSha384 => pbkdf2_hmac::<Sha384>(password, salt, iterations.get(), output),
            Prf::HmacSha512 => pbkdf2_hmac::<Sha512>(password, salt, iterations.get(), output),
        }

        Ok(())
    }
}
