//! # SecureIdentity Password
//!
//! Salted, iterated password hashing with PBKDF2 (HMAC-SHA-256 by default).
//!
//! A password is turned into a single storable string,
//! `<iterations>.<base64(salt)>.<base64(key)>`, and a candidate password is
//! later checked against it in constant time.
//!
//! ## Quick Start
//!
//! ```
//! use secure_identity_password::{HashingParameters, hash, verify};
//!
//! let params = HashingParameters::default().with_secret_suffix("server-pepper");
//! let stored = hash("correct horse battery staple", &params)?;
//!
//! assert!(verify(&stored, "correct horse battery staple", &params));
//! assert!(!verify(&stored, "Tr0ub4dor&3", &params));
//! # Ok::<(), secure_identity_password::PasswordError>(())
//! ```
//!
//! Both operations are pure and thread-safe. Hashing fails only for an empty
//! password or unusable parameters; verification never fails and reduces any
//! malformed input to `false`.

pub mod algorithm;
pub mod compare;
pub mod config;
pub mod error;
pub mod hasher;
pub mod provider;
pub mod record;
pub mod service;
pub mod verifier;

pub use algorithm::Prf;
pub use compare::constant_time_eq;
pub use config::HashingParameters;
pub use error::{PasswordError, Result};
pub use provider::{KdfProvider, RustCryptoProvider};
pub use record::HashRecord;
pub use service::PasswordHasher;
pub use verifier::needs_rehash;

/// Hash a password with the default provider
///
/// # Errors
///
/// Returns `InvalidPassword` if `password` is empty, `InvalidParameters` if
/// `params` fail validation, or a provider error if randomness or
/// derivation fails.
pub fn hash(password: &str, params: &HashingParameters) -> Result<String> {
    hasher::hash_with(&RustCryptoProvider, password, params)
}

/// Verify a password against an encoded record with the default provider
///
/// Never fails: malformed records, mismatched iteration counts and invalid
/// parameters all produce `false`. Only canonical records verify; an
/// iteration field with a sign, whitespace or leading zeros is malformed.
#[must_use]
pub fn verify(encoded: &str, password: &str, params: &HashingParameters) -> bool {
    verifier::verify_with(&RustCryptoProvider, encoded, password, params)
}

/// Verify a password, surfacing the reason a record could not be checked
///
/// # Errors
///
/// See [`verifier::check_with`].
pub fn check(encoded: &str, password: &str, params: &HashingParameters) -> Result<bool> {
    verifier::check_with(&RustCryptoProvider, encoded, password, params)
}
