//! HMAC-signed JSON Web Tokens (HS256, HS384, HS512)
//!
//! Issue a compact `header.payload.signature` token over an arbitrary JSON
//! claims object, and later check it with the same shared secret.
//!
//! ```
//! use hsjwt::{decode_payload, sign, verify, Algorithm, Diagnostic};
//! use serde_json::json;
//!
//! let token = sign(&json!({"sub": "4321"}), "4321", Algorithm::HS512)?;
//!
//! let outcome = verify(&token, "4321");
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.message(), "This token is valid");
//!
//! assert_eq!(verify(&token, "wrong-secret").diagnostic(), Diagnostic::Invalid);
//! assert_eq!(verify("abc.def", "4321").diagnostic(), Diagnostic::Format);
//!
//! // unverified, never use for authorization
//! let claims = decode_payload(&token).expect("payload decodes");
//! assert_eq!(claims["sub"], "4321");
//! # Ok::<(), hsjwt::JwtError>(())
//! ```
//!
//! Two error tiers:
//!
//! - signing is trusted input, so mistakes (an unknown algorithm name,
//!   claims that are not an object) come back as [`JwtError`];
//! - verification and decoding take attacker-controlled input and never fail:
//!   they report a [`Diagnostic`] naming the first check that rejected the
//!   token.
//!
//! `exp` and `nbf` are the only claims inspected. The time source is
//! injectable through [`Clock`].
//!
//! The algorithm used to check a token is the one its header names. A secret
//! therefore validates tokens under any of the three HMAC variants.

pub mod algorithms;
pub mod api;
pub mod clock;
pub mod codec;
pub(crate) mod crypto;
pub mod decoder;
mod error;
pub mod outcome;
pub mod signer;
pub mod types;
pub mod verifier;

pub use algorithms::{hash_for, is_supported, Algorithm, HashPrimitive};
pub use api::{AsyncJwtResult, AsyncJwtResultWithError, Jwt, JwtBuilder, JwtBuilderWithError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use decoder::{decode_payload, decode_payload_as};
pub use error::{CodecError, JwtError, JwtResult};
pub use outcome::{Diagnostic, VerificationOutcome};
pub use signer::{sign, sign_signature};
pub use types::{Claims, Header};
pub use verifier::{decode_header, is_valid, verify, Verifier};
