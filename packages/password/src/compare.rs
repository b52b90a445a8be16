//! Constant-time comparison of derived keys

use subtle::ConstantTimeEq;

/// Compare two byte slices without short-circuiting on the first difference
///
/// Slices of different lengths compare unequal; the length itself is not
/// treated as secret.
#[must_use]
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
