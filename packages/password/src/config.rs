//! Hashing parameters shared by the hash and verify operations
//!
//! Only the iteration count travels inside the encoded record. Salt size,
//! key size, separator, secret suffix and pseudorandom function must be the
//! same on both sides.

use crate::algorithm::Prf;
use crate::{PasswordError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// Default salt size in bytes
pub const DEFAULT_SALT_SIZE: usize = 16;
/// Default derived key size in bytes
pub const DEFAULT_KEY_SIZE: usize = 32;
/// Default PBKDF2 iteration count
pub const DEFAULT_ITERATIONS: u32 = 10_000;
/// Default field separator of the encoded record
pub const DEFAULT_FIELD_SEPARATOR: char = '.';
/// Smallest salt accepted by [`HashingParameters::validate`]
pub const MIN_SALT_SIZE: usize = 8;
/// Largest salt accepted by [`HashingParameters::validate`]
pub const MAX_SALT_SIZE: usize = i16::MAX as usize;
/// Largest derived key accepted by [`HashingParameters::validate`]
pub const MAX_KEY_SIZE: usize = i16::MAX as usize;

/// Immutable configuration for PBKDF2 password hashing
///
/// Build one with [`HashingParameters::default`] or a preset, adjust it with
/// the `with_*` methods, then hand it by reference to every hash and verify
/// call.
///
/// The separator must not be a character of the standard base64 alphabet
/// (`A-Z`, `a-z`, `0-9`, `+`, `/`, `=`); such a separator would make encoded
/// records ambiguous and is rejected by [`validate`](Self::validate).
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashingParameters {
    #[serde(default = "default_salt_size")]
    salt_size: usize,
    #[serde(default = "default_key_size")]
    key_size: usize,
    #[serde(default = "default_iterations")]
    iterations: u32,
    #[serde(default = "default_field_separator")]
    field_separator: char,
    /// Server-side secret appended to every password, never serialized
    #[serde(default, skip_serializing)]
    secret_suffix: String,
    #[serde(default)]
    prf: Prf,
}

fn default_salt_size() -> usize {
    DEFAULT_SALT_SIZE
}

fn default_key_size() -> usize {
    DEFAULT_KEY_SIZE
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_field_separator() -> char {
    DEFAULT_FIELD_SEPARATOR
}

impl HashingParameters {
    /// Standard parameters: 16-byte salt, 32-byte key, 10,000 rounds of
    /// HMAC-SHA-256, `.` separator, no secret suffix
    #[must_use]
    pub fn standard() -> Self {
        Self {
            salt_size: DEFAULT_SALT_SIZE,
            key_size: DEFAULT_KEY_SIZE,
            iterations: DEFAULT_ITERATIONS,
            field_separator: DEFAULT_FIELD_SEPARATOR,
            secret_suffix: String::new(),
            prf: Prf::HmacSha256,
        }
    }

    /// High-security parameters: 32-byte salt, 64-byte key, 210,000 rounds
    /// of HMAC-SHA-512 (OWASP recommendation 2023)
    #[must_use]
    pub fn high_security() -> Self {
        Self::standard()
            .with_salt_size(32)
            .with_key_size(Prf::HmacSha512.output_size())
            .with_iterations(210_000)
            .with_prf(Prf::HmacSha512)
    }

    /// Load parameters from a JSON document
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if the document cannot be parsed, contains
    /// unknown fields, or describes parameters rejected by
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json).map_err(|e| {
            PasswordError::invalid_parameters(format!("failed to parse parameters: {e}"))
        })?;
        params.validate()?;
        Ok(params)
    }

    /// Set the salt size in bytes
    #[must_use]
    pub fn with_salt_size(mut self, salt_size: usize) -> Self {
        self.salt_size = salt_size;
        self
    }

    /// Set the derived key size in bytes
    #[must_use]
    pub fn with_key_size(mut self, key_size: usize) -> Self {
        self.key_size = key_size;
        self
    }

    /// Set the PBKDF2 iteration count
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the character delimiting the encoded record fields
    #[must_use]
    pub fn with_field_separator(mut self, field_separator: char) -> Self {
        self.field_separator = field_separator;
        self
    }

    /// Set the server-side secret appended to every password
    #[must_use]
    pub fn with_secret_suffix(mut self, secret_suffix: impl Into<String>) -> Self {
        self.secret_suffix.zeroize();
        self.secret_suffix = secret_suffix.into();
        self
    }

    /// Set the pseudorandom function
    #[must_use]
    pub fn with_prf(mut self, prf: Prf) -> Self {
        self.prf = prf;
        self
    }

    /// Salt size in bytes
    #[must_use]
    pub fn salt_size(&self) -> usize {
        self.salt_size
    }

    /// Derived key size in bytes
    #[must_use]
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    /// PBKDF2 iteration count
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Encoded record field separator
    #[must_use]
    pub fn field_separator(&self) -> char {
        self.field_separator
    }

    /// Server-side secret suffix
    #[must_use]
    pub fn secret_suffix(&self) -> &str {
        &self.secret_suffix
    }

    /// Pseudorandom function
    #[must_use]
    pub fn prf(&self) -> Prf {
        self.prf
    }

    /// Check that the parameters can produce and read well-formed records
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if:
    /// - `iterations` is zero
    /// - `key_size` is zero or above [`MAX_KEY_SIZE`]
    /// - `salt_size` is below [`MIN_SALT_SIZE`] or above [`MAX_SALT_SIZE`]
    /// - `field_separator` belongs to the base64 alphabet
    pub fn validate(&self) -> Result<()> {
        self.validate_for_verify()?;
        if !(MIN_SALT_SIZE..=MAX_SALT_SIZE).contains(&self.salt_size) {
            return Err(PasswordError::invalid_parameters(format!(
                "salt size must be between {MIN_SALT_SIZE} and {MAX_SALT_SIZE} bytes, got {}",
                self.salt_size
            )));
        }
        Ok(())
    }

    /// Check only the fields verification reads; the salt comes from the record
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` for a zero iteration count, a key size
    /// outside `1..=MAX_KEY_SIZE`, or a separator from the base64 alphabet.
    pub fn validate_for_verify(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(PasswordError::invalid_parameters(
                "iterations must be non-zero",
            ));
        }
        if !(1..=MAX_KEY_SIZE).contains(&self.key_size) {
            return Err(PasswordError::invalid_parameters(format!(
                "key size must be between 1 and {MAX_KEY_SIZE} bytes, got {}",
                self.key_size
            )));
        }
        if is_base64_char(self.field_separator) {
            return Err(PasswordError::invalid_parameters(format!(
                "field separator {:?} collides with the base64 alphabet",
                self.field_separator
            )));
        }
        Ok(())
    }
}

/// Characters the standard padded base64 engine can emit
pub(crate) fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

impl Default for HashingParameters {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for HashingParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.secret_suffix.is_empty() {
            "<none>"
        } else {
            "<redacted>"
        };
        f.debug_struct("HashingParameters")
            .field("salt_size", &self.salt_size)
            .field("key_size", &self.key_size)
            .field("iterations", &self.iterations)
            .field("field_separator", &self.field_separator)
            .field("secret_suffix", &suffix)
            .field("prf", &self.prf)
            .finish()
    }
}

impl Drop for HashingParameters {
    fn drop(&mut self) {
        self.secret_suffix.zeroize();
    }
}
