//! Encoded hash record: `<iterations><sep><base64(salt)><sep><base64(key)>`

use crate::{PasswordError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use zeroize::Zeroizing;

/// Number of fields in an encoded record
const FIELD_COUNT: usize = 3;

/// Decoded form of a stored password hash
///
/// Records are produced by hashing or by parsing a stored string and are
/// never modified afterwards. The derived key is wiped on drop.
#[derive(Clone)]
pub struct HashRecord {
    iterations: u32,
    salt: Vec<u8>,
    derived_key: Zeroizing<Vec<u8>>,
}

impl HashRecord {
    /// Assemble a record from its parts
    #[must_use]
    pub fn new(iterations: u32, salt: Vec<u8>, derived_key: Vec<u8>) -> Self {
        Self {
            iterations,
            salt,
            derived_key: Zeroizing::new(derived_key),
        }
    }

    /// PBKDF2 iteration count the key was derived with
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Salt bytes
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Derived key bytes
    #[must_use]
    pub fn derived_key(&self) -> &[u8] {
        &self.derived_key
    }

    /// Serialize as `<iterations><sep><base64(salt)><sep><base64(key)>`
    #[must_use]
    pub fn encode(&self, separator: char) -> String {
        format!(
            "{iterations}{separator}{salt}{separator}{key}",
            iterations = self.iterations,
            salt = STANDARD.encode(&self.salt),
            key = STANDARD.encode(self.derived_key.as_slice()),
        )
    }

    /// Parse an encoded record
    ///
    /// The input is split on `separator` into at most three fields. The
    /// iteration field must be a canonical, non-zero decimal number and the
    /// other two fields strict padded base64, so re-encoding a parsed record
    /// with the same separator yields the original string.
    ///
    /// # Errors
    ///
    /// Returns `MalformedHash` if:
    /// - the input does not have exactly three fields
    /// - the iteration field is not canonical decimal or is zero
    /// - the salt or key field is not valid base64
    /// - the salt or key field is empty
    pub fn parse(encoded: &str, separator: char) -> Result<Self> {
        let fields: Vec<&str> = encoded.splitn(FIELD_COUNT, separator).collect();
        let [iterations, salt, key] = fields.as_slice() else {
            return Err(PasswordError::malformed(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            )));
        };

        let iterations = parse_iterations(iterations)?;
        let salt = decode_field("salt", salt)?;
        let derived_key = Zeroizing::new(decode_field("key", key)?);

        Ok(Self {
            iterations,
            salt,
            derived_key,
        })
    }
}

fn parse_iterations(field: &str) -> Result<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PasswordError::malformed("iteration count is not numeric"));
    }
    if field.starts_with('0') {
        return Err(PasswordError::malformed(
            "iteration count must be a positive number without leading zeros",
        ));
    }
    field
        .parse::<u32>()
        .map_err(|e| PasswordError::malformed(format!("iteration count out of range: {e}")))
}

fn decode_field(name: &str, field: &str) -> Result<Vec<u8>> {
    let bytes = STANDARD
        .decode(field)
        .map_err(|e| PasswordError::malformed(format!("invalid base64 in {name} field: {e}")))?;
    if bytes.is_empty() {
        return Err(PasswordError::malformed(format!("{name} field is empty")));
    }
    Ok(bytes)
}

impl fmt::Debug for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRecord")
            .field("iterations", &self.iterations)
            .field("salt_len", &self.salt.len())
            .field("derived_key_len", &self.derived_key.len())
            .finish()
    }
}
