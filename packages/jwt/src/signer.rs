//! Token signing
//!
//! Builds the `{alg, typ}` header from the chosen [`Algorithm`], encodes header
//! and claims, and MACs `header.payload` with the secret. Nothing is retained
//! after the call returns.

use crate::{
    algorithms::Algorithm,
    codec::{encode_base64_url, encode_json_object},
    crypto::compute_mac,
    error::{JwtError, JwtResult},
    types::{Claims, Header},
};
use serde::Serialize;
use serde_json::Value;

/// Sign `claims` and return the full `header.payload.signature` token.
///
/// Algorithm identifiers arriving as strings go through
/// `"HS256".parse::<Algorithm>()`, which fails with
/// [`JwtError::UnsupportedAlgorithm`] for anything outside the registry.
///
/// # Errors
///
/// [`JwtError::InvalidClaims`] if `claims` does not serialize to a JSON object.
pub fn sign<C: Serialize + ?Sized>(
    claims: &C,
    secret: impl AsRef<[u8]>,
    alg: Algorithm,
) -> JwtResult<String> {
    let signed = sign_claims(&to_claims(claims)?, secret.as_ref(), alg)?;
    Ok(format!("{}.{}", signed.data, signed.signature))
}

/// Sign `claims` and return only the base64url signature segment.
///
/// # Errors
///
/// Same as [`sign`].
pub fn sign_signature<C: Serialize + ?Sized>(
    claims: &C,
    secret: impl AsRef<[u8]>,
    alg: Algorithm,
) -> JwtResult<String> {
    signature_for(&to_claims(claims)?, secret.as_ref(), alg)
}

/// Signature segment for already-decoded claims.
pub(crate) fn signature_for(claims: &Claims, secret: &[u8], alg: Algorithm) -> JwtResult<String> {
    Ok(sign_claims(claims, secret, alg)?.signature)
}

struct Signed {
    data: String,
    signature: String,
}

fn sign_claims(claims: &Claims, secret: &[u8], alg: Algorithm) -> JwtResult<Signed> {
    let header = encode_json_object(&Header::new(alg))
        .map_err(|e| JwtError::serialization(e.to_string()))?;
    let payload =
        encode_json_object(claims).map_err(|e| JwtError::serialization(e.to_string()))?;
    let data = format!("{header}.{payload}");

    let mac = compute_mac(alg.hash(), secret, data.as_bytes())?;
    tracing::trace!(alg = %alg, "signed token");

    Ok(Signed {
        data,
        signature: encode_base64_url(mac),
    })
}

fn to_claims<C: Serialize + ?Sized>(claims: &C) -> JwtResult<Claims> {
    match serde_json::to_value(claims) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(JwtError::invalid_claims(format!(
            "claims must be a JSON object, got {}",
            kind_of(&other)
        ))),
        Err(e) => Err(JwtError::invalid_claims(e.to_string())),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
