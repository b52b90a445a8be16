//! Verify operation: candidate password against an encoded record
//!
//! The configured iteration count is authoritative. A stored record that
//! claims a different count is refused instead of being re-derived with the
//! stored value, so a tampered record cannot lower the work factor. Moving
//! stored hashes to new parameters goes through [`needs_rehash`]: verify with
//! the parameters the record was created with, then hash again with the
//! current ones.

use crate::compare::constant_time_eq;
use crate::config::HashingParameters;
use crate::hasher::effective_password;
use crate::provider::KdfProvider;
use crate::record::HashRecord;
use crate::{PasswordError, Result};
use zeroize::Zeroizing;

/// Verify `password` against `encoded`, reducing every failure to `false`
///
/// Malformed records, an iteration count different from `params`, invalid
/// parameters and provider failures all yield `false`. The reason is logged
/// at debug level. Only canonical records verify: the iteration field must be
/// plain decimal digits without sign, whitespace or leading zeros.
#[must_use]
pub fn verify_with<P: KdfProvider + ?Sized>(
    provider: &P,
    encoded: &str,
    password: &str,
    params: &HashingParameters,
) -> bool {
    match check_with(provider, encoded, password, params) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::debug!(error = %e, "Password verification rejected");
            false
        }
    }
}

/// Verify `password` against `encoded`, reporting structural problems
///
/// Returns `Ok(true)` on a match and `Ok(false)` when the record is sound
/// but the password does not reproduce it. An empty candidate is `Ok(false)`
/// without running the KDF.
///
/// # Errors
///
/// Returns an error if:
/// - `params` fail [`HashingParameters::validate_for_verify`]
///   (`InvalidParameters`)
/// - the record is malformed or its key length differs from
///   `params.key_size()` (`MalformedHash`)
/// - the stored iteration count differs from `params.iterations()`
///   (`IterationMismatch`)
/// - the provider fails to derive the candidate key
pub fn check_with<P: KdfProvider + ?Sized>(
    provider: &P,
    encoded: &str,
    password: &str,
    params: &HashingParameters,
) -> Result<bool> {
    params.validate_for_verify()?;

    let record = HashRecord::parse(encoded, params.field_separator())?;

    if record.iterations() != params.iterations() {
        return Err(PasswordError::IterationMismatch {
            expected: params.iterations(),
            actual: record.iterations(),
        });
    }

    if record.derived_key().len() != params.key_size() {
        return Err(PasswordError::malformed(format!(
            "derived key is {} bytes, expected {}",
            record.derived_key().len(),
            params.key_size()
        )));
    }

    if password.is_empty() {
        return Ok(false);
    }

    let effective = effective_password(password, params);
    let mut candidate = Zeroizing::new(vec![0u8; params.key_size()]);
    provider.derive(
        effective.as_bytes(),
        record.salt(),
        params.iterations(),
        params.prf(),
        &mut candidate,
    )?;

    Ok(constant_time_eq(&candidate, record.derived_key()))
}

/// Whether a stored record should be replaced by a fresh hash under `params`
///
/// True when the record cannot be parsed with the configured separator or
/// when its iteration count, salt length or key length differs from the
/// configured values.
#[must_use]
pub fn needs_rehash(encoded: &str, params: &HashingParameters) -> bool {
    match HashRecord::parse(encoded, params.field_separator()) {
        Ok(record) => {
            record.iterations() != params.iterations()
                || record.salt().len() != params.salt_size()
                || record.derived_key().len() != params.key_size()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Stored hash unreadable, rehash required");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::hash_with;
    use crate::provider::RustCryptoProvider;

    fn fast_params() -> HashingParameters {
        HashingParameters::default().with_iterations(1000)
    }

    #[test]
    fn accepts_known_record() {
        let params = fast_params().with_secret_suffix("pepper");
        let encoded = "1000.AAECAwQFBgcICQoLDA0ODw==.La1aAPy+MQX4GwPbmEIv5OLlIriktrsP+zMko3cOnZ4=";
        assert!(verify_with(&RustCryptoProvider, encoded, "correct horse", &params));
        assert!(!verify_with(&RustCryptoProvider, encoded, "correct horsf", &params));
    }

    #[test]
    fn check_reports_iteration_mismatch() {
        let encoded = hash_with(&RustCryptoProvider, "secret", &fast_params()).expect("hash");
        let params = fast_params().with_iterations(1001);
        let err = check_with(&RustCryptoProvider, &encoded, "secret", &params).unwrap_err();
        assert!(matches!(
            err,
            PasswordError::IterationMismatch {
                expected: 1001,
                actual: 1000
            }
        ));
    }

    #[test]
    fn check_reports_key_length_mismatch() {
        let encoded = hash_with(&RustCryptoProvider, "secret", &fast_params()).expect("hash");
        let params = fast_params().with_key_size(16);
        let err = check_with(&RustCryptoProvider, &encoded, "secret", &params).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn empty_candidate_is_a_plain_mismatch() {
        let encoded = hash_with(&RustCryptoProvider, "secret", &fast_params()).expect("hash");
        let result = check_with(&RustCryptoProvider, &encoded, "", &fast_params());
        assert!(matches!(result, Ok(false)));
    }

    #[test]
    fn invalid_parameters_fail_closed() {
        let encoded = hash_with(&RustCryptoProvider, "secret", &fast_params()).expect("hash");
        let params = fast_params().with_key_size(usize::MAX);
        assert!(!verify_with(&RustCryptoProvider, &encoded, "secret", &params));
    }

    #[test]
    fn salt_size_does_not_affect_verification() {
        let encoded = hash_with(&RustCryptoProvider, "secret", &fast_params()).expect("hash");
        let params = fast_params().with_salt_size(0);
        assert!(verify_with(&RustCryptoProvider, &encoded, "secret", &params));
    }

    #[test]
    fn non_canonical_iteration_field_does_not_verify() {
        let encoded = hash_with(&RustCryptoProvider, "secret", &fast_params()).expect("hash");
        for prefix in ["01000", "+1000", " 1000"] {
            let altered = encoded.replacen("1000", prefix, 1);
            assert!(!verify_with(&RustCryptoProvider, &altered, "secret", &fast_params()));
        }
    }

    #[test]
    fn needs_rehash_tracks_parameter_changes() {
        let encoded = hash_with(&RustCryptoProvider, "secret", &fast_params()).expect("hash");
        assert!(!needs_rehash(&encoded, &fast_params()));
        assert!(needs_rehash(&encoded, &fast_params().with_iterations(2000)));
        assert!(needs_rehash(&encoded, &fast_params().with_salt_size(32)));
        assert!(needs_rehash(&encoded, &fast_params().with_key_size(64)));
        assert!(needs_rehash("garbage", &fast_params()));
    }
}
