//! Token verification
//!
//! Verification runs an ordered list of gates and stops at the first one that
//! fails:
//!
//! 1. three non-empty segments ([`Diagnostic::Format`])
//! 2. header decodes to a JSON object holding at most `alg` and `typ`, with
//!    `typ` absent or `"JWT"` ([`Diagnostic::HeaderEncoding`])
//! 3. payload decodes to a JSON object ([`Diagnostic::PayloadEncoding`])
//! 4. `nbf` not in the future ([`Diagnostic::NotYetValid`])
//! 5. `exp` not in the past ([`Diagnostic::Expired`])
//! 6. `alg` is a registered identifier ([`Diagnostic::UnsupportedAlg`]); a
//!    missing or non-string `alg` fails here too
//! 7. re-signing the decoded claims under `alg` reproduces the received
//!    signature, compared in constant time ([`Diagnostic::Invalid`])
//!
//! The algorithm used in step 7 comes from the token's own header. Any of the
//! registered algorithms is accepted for a given secret; callers that need to
//! pin one must check [`decode_header`] themselves.
//!
//! Malformed or hostile input never panics and never returns an error: the
//! result is always a [`VerificationOutcome`].

use crate::{
    algorithms::Algorithm,
    clock::{Clock, SystemClock},
    codec::{decode_json_object, split_token},
    crypto::constant_time_eq,
    outcome::{Diagnostic, VerificationOutcome},
    signer::signature_for,
    types::{Claims, Header, ReceivedHeader},
};

/// Verifies tokens against a shared secret using the time from `C`.
#[derive(Debug, Clone, Default)]
pub struct Verifier<C = SystemClock> {
    clock: C,
}

impl Verifier<SystemClock> {
    /// Verifier reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Verifier<C> {
    /// Verifier reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Run every gate and report the deciding diagnostic.
    #[must_use]
    pub fn verify(&self, token: &str, secret: impl AsRef<[u8]>) -> VerificationOutcome {
        match self.check(token, secret.as_ref()) {
            Ok(()) => VerificationOutcome::valid(),
            Err(diagnostic) => {
                tracing::debug!(?diagnostic, "token rejected");
                VerificationOutcome::rejected(diagnostic)
            }
        }
    }

    /// [`Verifier::verify`] projected to a boolean.
    #[must_use]
    pub fn is_valid(&self, token: &str, secret: impl AsRef<[u8]>) -> bool {
        self.verify(token, secret).is_valid()
    }

    fn check(&self, token: &str, secret: &[u8]) -> Result<(), Diagnostic> {
        let segments = split_token(token).ok_or(Diagnostic::Format)?;

        let header: ReceivedHeader =
            decode_json_object(segments.header).map_err(|_| Diagnostic::HeaderEncoding)?;
        if !header.is_jwt() {
            return Err(Diagnostic::HeaderEncoding);
        }

        let claims: Claims =
            decode_json_object(segments.payload).map_err(|_| Diagnostic::PayloadEncoding)?;

        self.check_time(&claims)?;

        let alg = header.algorithm().ok_or(Diagnostic::UnsupportedAlg)?;

        let expected = resign(&claims, secret, alg)?;
        if constant_time_eq(segments.signature, &expected) {
            Ok(())
        } else {
            Err(Diagnostic::Invalid)
        }
    }

    fn check_time(&self, claims: &Claims) -> Result<(), Diagnostic> {
        let now_ms = self.clock.now().timestamp_millis() as f64;

        if let Some(nbf) = numeric_claim(claims, "nbf") {
            if now_ms < nbf * 1000.0 {
                return Err(Diagnostic::NotYetValid);
            }
        }

        if let Some(exp) = numeric_claim(claims, "exp") {
            if now_ms > exp * 1000.0 {
                return Err(Diagnostic::Expired);
            }
        }

        Ok(())
    }
}

fn resign(claims: &Claims, secret: &[u8], alg: Algorithm) -> Result<String, Diagnostic> {
    signature_for(claims, secret, alg).map_err(|e| {
        tracing::error!(error = %e, alg = %alg, "re-signing decoded claims failed");
        Diagnostic::Invalid
    })
}

/// `exp`/`nbf` count only when they are JSON numbers.
fn numeric_claim(claims: &Claims, name: &str) -> Option<f64> {
    claims.get(name).and_then(serde_json::Value::as_f64)
}

/// Decode the header of a token without verifying anything.
///
/// Only headers of the exact `{"alg": string, "typ": string}` shape decode.
///
/// # Errors
///
/// [`Diagnostic::Format`] or [`Diagnostic::HeaderEncoding`].
pub fn decode_header(token: &str) -> Result<Header, Diagnostic> {
    let segments = split_token(token).ok_or(Diagnostic::Format)?;
    decode_json_object(segments.header).map_err(|_| Diagnostic::HeaderEncoding)
}

/// Verify with the system clock and report the deciding diagnostic.
#[must_use]
pub fn verify(token: &str, secret: impl AsRef<[u8]>) -> VerificationOutcome {
    Verifier::new().verify(token, secret)
}

/// Verify with the system clock, boolean result only.
#[must_use]
pub fn is_valid(token: &str, secret: impl AsRef<[u8]>) -> bool {
    Verifier::new().is_valid(token, secret)
}
