//! Unverified payload extraction
//!
//! **Do not use the result for authorization.** These functions check only
//! that the token has three segments and that its payload decodes. The
//! signature, the header and the temporal claims are not looked at, so the
//! claims returned may have been written by anyone. Use
//! [`verify`](crate::verify) first when authenticity matters.

use crate::{
    codec::{decode_json_object, split_token},
    outcome::Diagnostic,
    types::Claims,
};
use serde::de::DeserializeOwned;

/// Extract the claims object of `token` without verifying it.
///
/// # Errors
///
/// [`Diagnostic::Format`] for anything other than three non-empty segments,
/// [`Diagnostic::PayloadEncoding`] if the payload is not base64url JSON object.
pub fn decode_payload(token: &str) -> Result<Claims, Diagnostic> {
    decode_payload_as(token)
}

/// Extract the claims of `token` into `T` without verifying it.
///
/// # Errors
///
/// As [`decode_payload`]; a payload that does not deserialize into `T` is
/// [`Diagnostic::PayloadEncoding`].
pub fn decode_payload_as<T: DeserializeOwned>(token: &str) -> Result<T, Diagnostic> {
    let segments = split_token(token).ok_or(Diagnostic::Format)?;
    decode_json_object(segments.payload).map_err(|_| Diagnostic::PayloadEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::Algorithm, codec::encode_base64_url, signer::sign};
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_decode_ignores_signature() {
        let token = sign(&json!({"sub": "4321", "name": "matheesha"}), "k", Algorithm::HS256)
            .unwrap();
        let (data, _) = token.rsplit_once('.').unwrap();
        let tampered = format!("{data}.garbage");

        let claims = decode_payload(&tampered).unwrap();
        assert_eq!(claims.get("sub"), Some(&json!("4321")));
        assert_eq!(claims.get("name"), Some(&json!("matheesha")));
    }

    #[test]
    fn test_decode_ignores_header_and_expiry() {
        let payload = encode_base64_url(br#"{"exp":1}"#);
        let token = format!("!!!.{payload}.sig");
        let claims = decode_payload(&token).unwrap();
        assert_eq!(claims.get("exp"), Some(&json!(1)));
    }

    #[test]
    fn test_decode_format_failure() {
        for token in ["", "abc", "abc.def", "a.b.c.d"] {
            assert_eq!(decode_payload(token).unwrap_err(), Diagnostic::Format);
        }
    }

    #[test]
    fn test_decode_payload_failure() {
        let bad_json = encode_base64_url(b"{oops");
        for payload in ["!!!", bad_json.as_str()] {
            let token = format!("e30.{payload}.sig");
            assert_eq!(
                decode_payload(&token).unwrap_err(),
                Diagnostic::PayloadEncoding
            );
        }
    }

    #[test]
    fn test_decode_payload_as() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Subject {
            sub: String,
        }

        let token = sign(&json!({"sub": "4321", "role": "admin"}), "k", Algorithm::HS256).unwrap();
        let subject: Subject = decode_payload_as(&token).unwrap();
        assert_eq!(
            subject,
            Subject {
                sub: "4321".to_string()
            }
        );

        let no_sub = sign(&json!({"role": "admin"}), "k", Algorithm::HS256).unwrap();
        assert_eq!(
            decode_payload_as::<Subject>(&no_sub).unwrap_err(),
            Diagnostic::PayloadEncoding
        );
    }
}
