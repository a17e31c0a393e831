//! Base64url and JSON transcoding for token segments
//!
//! Encoding follows RFC 4648 §5 with padding stripped. Decoding accepts
//! segments with or without padding, rejects non-canonical trailing bits, and
//! reports every failure as a value so callers on the untrusted path can
//! branch without panicking.

use crate::error::CodecError;
use base64::{
    alphabet,
    engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
    Engine as _,
};
use serde::{de::DeserializeOwned, Serialize};

/// URL-safe alphabet, no padding on encode, padding optional on decode.
const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Separator between token segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// Encode bytes as unpadded base64url.
#[inline]
#[must_use]
pub fn encode_base64_url(input: impl AsRef<[u8]>) -> String {
    BASE64_URL.encode(input)
}

/// Decode a base64url segment.
#[inline]
pub fn decode_base64_url(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64_URL.decode(input)
}

/// Serialize `value` to compact UTF-8 JSON and base64url-encode it.
pub fn encode_json_object<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(value)?;
    Ok(encode_base64_url(json))
}

/// Base64url-decode a segment and parse the bytes as JSON into `T`.
pub fn decode_json_object<T: DeserializeOwned>(segment: &str) -> Result<T, CodecError> {
    let bytes = decode_base64_url(segment)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// The three segments of a compact token, still encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Encoded header
    pub header: &'a str,
    /// Encoded claims
    pub payload: &'a str,
    /// Encoded MAC
    pub signature: &'a str,
}

/// Split `header.payload.signature`.
///
/// Returns `None` unless there are exactly three segments and none is empty.
#[must_use]
pub fn split_token(token: &str) -> Option<Segments<'_>> {
    let mut parts = token.split(SEGMENT_SEPARATOR);
    let header = parts.next()?;
    let payload = parts.next()?;
    let signature = parts.next()?;
    if parts.next().is_some() || header.is_empty() || payload.is_empty() || signature.is_empty() {
        return None;
    }
    Some(Segments {
        header,
        payload,
        signature,
    })
}
