//! Stateless password hashing service

use crate::config::HashingParameters;
use crate::provider::{KdfProvider, RustCryptoProvider};
use crate::{PasswordError, Result, hasher, verifier};
use zeroize::Zeroizing;

/// Hashes and verifies passwords with one fixed set of parameters
///
/// The service holds no state beyond its configuration, so a single
/// instance can be shared between threads or cloned freely.
///
/// ```
/// use secure_identity_password::{HashingParameters, PasswordHasher};
///
/// let hasher = PasswordHasher::new(HashingParameters::default().with_iterations(1000));
/// let stored = hasher.hash("hunter2")?;
/// assert!(hasher.verify(&stored, "hunter2"));
/// assert!(!hasher.verify(&stored, "hunter3"));
/// # Ok::<(), secure_identity_password::PasswordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PasswordHasher<P = RustCryptoProvider> {
    params: HashingParameters,
    provider: P,
}

impl PasswordHasher {
    /// Create a service backed by the default provider
    #[must_use]
    pub fn new(params: HashingParameters) -> Self {
        Self::with_provider(params, RustCryptoProvider)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(HashingParameters::default())
    }
}

impl<P: KdfProvider> PasswordHasher<P> {
    /// Create a service backed by a custom provider
    #[must_use]
    pub fn with_provider(params: HashingParameters, provider: P) -> Self {
        Self { params, provider }
    }

    /// Parameters used for every operation
    #[must_use]
    pub fn params(&self) -> &HashingParameters {
        &self.params
    }

    /// Hash a password into an encoded record
    ///
    /// # Errors
    ///
    /// Returns `InvalidPassword` for an empty password, `InvalidParameters`
    /// for unusable parameters, or the provider's error.
    pub fn hash(&self, password: &str) -> Result<String> {
        hasher::hash_with(&self.provider, password, &self.params)
    }

    /// Verify a password against an encoded record; never fails
    #[must_use]
    pub fn verify(&self, encoded: &str, password: &str) -> bool {
        verifier::verify_with(&self.provider, encoded, password, &self.params)
    }

    /// Verify a password, reporting why a record could not be checked
    ///
    /// # Errors
    ///
    /// See [`verifier::check_with`].
    pub fn check(&self, encoded: &str, password: &str) -> Result<bool> {
        verifier::check_with(&self.provider, encoded, password, &self.params)
    }

    /// Whether `encoded` should be replaced by a fresh hash
    #[must_use]
    pub fn needs_rehash(&self, encoded: &str) -> bool {
        verifier::needs_rehash(encoded, &self.params)
    }
}

impl<P: KdfProvider + Clone + 'static> PasswordHasher<P> {
    /// Hash on the blocking thread pool so the async runtime keeps running
    ///
    /// # Errors
    ///
    /// Same as [`hash`](Self::hash), plus `Task` if the worker panicked or
    /// was cancelled.
    pub async fn hash_async(&self, password: impl Into<String>) -> Result<String> {
        let service = self.clone();
        let password = Zeroizing::new(password.into());
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| PasswordError::Task(e.to_string()))?
    }

    /// Verify on the blocking thread pool; a failed worker yields `false`
    pub async fn verify_async(
        &self,
        encoded: impl Into<String>,
        password: impl Into<String>,
    ) -> bool {
        let service = self.clone();
        let encoded = encoded.into();
        let password = Zeroizing::new(password.into());
        match tokio::task::spawn_blocking(move || service.verify(&encoded, &password)).await {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}
