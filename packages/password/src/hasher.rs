//! Hash operation: plaintext password to encoded record

use crate::config::HashingParameters;
use crate::provider::KdfProvider;
use crate::record::HashRecord;
use crate::{PasswordError, Result};
use zeroize::Zeroizing;

/// Hash `password` into an encoded record using `provider`
///
/// # Errors
///
/// Returns an error if:
/// - `password` is empty (`InvalidPassword`)
/// - `params` fail validation (`InvalidParameters`)
/// - the provider cannot produce a salt or derive the key
pub fn hash_with<P: KdfProvider + ?Sized>(
    provider: &P,
    password: &str,
    params: &HashingParameters,
) -> Result<String> {
    if password.is_empty() {
        return Err(PasswordError::InvalidPassword);
    }
    params.validate()?;

    let effective = effective_password(password, params);

    let mut salt = vec![0u8; params.salt_size()];
    provider.fill_random(&mut salt)?;

    let mut key = vec![0u8; params.key_size()];
    provider.derive(
        effective.as_bytes(),
        &salt,
        params.iterations(),
        params.prf(),
        &mut key,
    )?;

    tracing::debug!(
        iterations = params.iterations(),
        prf = %params.prf(),
        salt_size = params.salt_size(),
        key_size = params.key_size(),
        "Password hashed"
    );

    let record = HashRecord::new(params.iterations(), salt, key);
    Ok(record.encode(params.field_separator()))
}

/// Password with the configured secret suffix appended, wiped on drop
pub(crate) fn effective_password(password: &str, params: &HashingParameters) -> Zeroizing<String> {
    let suffix = params.secret_suffix();
    let mut effective = Zeroizing::new(String::with_capacity(password.len() + suffix.len()));
    effective.push_str(password);
    effective.push_str(suffix);
    effective
}
