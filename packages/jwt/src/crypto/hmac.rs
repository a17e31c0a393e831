//! HMAC-SHA2 operations for JWT signing and verification

use crate::algorithms::HashPrimitive;
use crate::error::{JwtError, JwtResult};
use hmac::{digest::KeyInit, Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Compute `HMAC(secret, data)` with the given hash primitive.
pub fn compute_mac(hash: HashPrimitive, secret: &[u8], data: &[u8]) -> JwtResult<Vec<u8>> {
    match hash {
        HashPrimitive::Sha256 => mac::<HmacSha256>(secret, data),
        HashPrimitive::Sha384 => mac::<HmacSha384>(secret, data),
        HashPrimitive::Sha512 => mac::<HmacSha512>(secret, data),
    }
}

#[inline]
fn mac<M: Mac + KeyInit>(secret: &[u8], data: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| JwtError::InvalidKey("Invalid HMAC key".to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Constant-time equality of two encoded signatures.
///
/// Lengths are compared first and a mismatch returns immediately; this leaks
/// the length only. Equal-length inputs are compared over every byte no
/// matter where the first difference is.
#[must_use]
pub fn constant_time_eq(received: &str, expected: &str) -> bool {
    let (a, b) = (received.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
