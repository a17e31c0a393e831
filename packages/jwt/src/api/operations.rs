//! JWT core operations - sign, verify and decode on the builders

use super::builder::{JwtBuilder, JwtBuilderWithError};
use super::validation::{AsyncJwtResult, AsyncJwtResultWithError};
use crate::{
    algorithms::Algorithm,
    clock::Clock,
    decoder,
    error::{JwtError, JwtResult},
    outcome::{Diagnostic, VerificationOutcome},
    signer,
    types::Claims,
    verifier::Verifier,
};
use serde::Serialize;
use std::sync::Arc;
use zeroize::Zeroizing;

type Secret = Zeroizing<Vec<u8>>;

fn require_secret(secret: Option<Secret>) -> JwtResult<Secret> {
    secret.ok_or_else(|| JwtError::missing_key("a shared secret is required"))
}

fn sign_job<C>(
    claims: C,
    secret: Option<Secret>,
    algorithm: Algorithm,
) -> impl FnOnce() -> JwtResult<String> + Send + 'static
where
    C: Serialize + Send + 'static,
{
    move || signer::sign(&claims, require_secret(secret)?.as_slice(), algorithm)
}

fn signature_job<C>(
    claims: C,
    secret: Option<Secret>,
    algorithm: Algorithm,
) -> impl FnOnce() -> JwtResult<String> + Send + 'static
where
    C: Serialize + Send + 'static,
{
    move || signer::sign_signature(&claims, require_secret(secret)?.as_slice(), algorithm)
}

fn verify_job(
    token: String,
    secret: Option<Secret>,
    clock: Arc<dyn Clock>,
) -> impl FnOnce() -> JwtResult<VerificationOutcome> + Send + 'static {
    move || {
        let secret = require_secret(secret)?;
        Ok(Verifier::with_clock(clock).verify(&token, secret.as_slice()))
    }
}

impl JwtBuilder {
    /// Sign `claims` into a full token on a background task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn sign<C: Serialize + Send + 'static>(self, claims: C) -> AsyncJwtResult<String> {
        AsyncJwtResult::spawn(sign_job(claims, self.secret, self.algorithm))
    }

    /// Sign `claims` and yield only the signature segment.
    pub fn sign_signature<C: Serialize + Send + 'static>(
        self,
        claims: C,
    ) -> AsyncJwtResult<String> {
        AsyncJwtResult::spawn(signature_job(claims, self.secret, self.algorithm))
    }

    /// Verify `token` on a background task.
    ///
    /// The configured algorithm is not consulted: the token's header decides.
    /// Errors only for a missing secret or a lost task; every property of the
    /// token itself is reported through the [`VerificationOutcome`].
    pub fn verify<S: AsRef<str>>(self, token: S) -> AsyncJwtResult<VerificationOutcome> {
        AsyncJwtResult::spawn(verify_job(
            token.as_ref().to_string(),
            self.secret,
            self.clock,
        ))
    }

    /// Extract claims without verification. See [`decoder::decode_payload`].
    ///
    /// # Errors
    ///
    /// [`Diagnostic::Format`] or [`Diagnostic::PayloadEncoding`].
    pub fn decode_payload(&self, token: &str) -> Result<Claims, Diagnostic> {
        decoder::decode_payload(token)
    }
}

impl<E> JwtBuilderWithError<E>
where
    E: Fn(JwtError) -> JwtError + Send + Sync + Unpin + 'static,
{
    /// Sign `claims` into a full token, mapping errors through the handler.
    pub fn sign<C: Serialize + Send + 'static>(
        self,
        claims: C,
    ) -> AsyncJwtResultWithError<String, E> {
        let job = sign_job(claims, self.inner.secret, self.inner.algorithm);
        AsyncJwtResult::spawn_with(job, self.error_handler)
    }

    /// Sign `claims` and yield only the signature segment.
    pub fn sign_signature<C: Serialize + Send + 'static>(
        self,
        claims: C,
    ) -> AsyncJwtResultWithError<String, E> {
        let job = signature_job(claims, self.inner.secret, self.inner.algorithm);
        AsyncJwtResult::spawn_with(job, self.error_handler)
    }

    /// Verify `token`, mapping errors through the handler.
    pub fn verify<S: AsRef<str>>(
        self,
        token: S,
    ) -> AsyncJwtResultWithError<VerificationOutcome, E> {
        let job = verify_job(
            token.as_ref().to_string(),
            self.inner.secret,
            self.inner.clock,
        );
        AsyncJwtResult::spawn_with(job, self.error_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Jwt;
    use crate::clock::FixedClock;
    use serde_json::json;

    #[tokio::test]
    async fn test_sign_then_verify() {
        let token = Jwt::hs384()
            .with_secret("k")
            .sign(json!({"sub": "4321"}))
            .await
            .unwrap();
        let outcome = Jwt::builder().with_secret("k").verify(&token).await.unwrap();
        assert!(outcome.is_valid());
    }

    #[tokio::test]
    async fn test_missing_secret() {
        let err = Jwt::hs256().sign(json!({})).await.unwrap_err();
        assert!(matches!(err, JwtError::MissingKey(_)));

        let err = Jwt::hs256().verify("a.b.c").await.unwrap_err();
        assert!(matches!(err, JwtError::MissingKey(_)));
    }

    #[tokio::test]
    async fn test_verify_uses_configured_clock() {
        let token = signer::sign(&json!({"exp": 100}), "k", Algorithm::HS256).unwrap();

        let before = Jwt::builder()
            .with_secret("k")
            .with_clock(FixedClock::from_timestamp(99))
            .verify(&token)
            .await
            .unwrap();
        assert!(before.is_valid());

        let after = Jwt::builder()
            .with_secret("k")
            .with_clock(FixedClock::from_timestamp(101))
            .verify(&token)
            .await
            .unwrap();
        assert_eq!(after.diagnostic(), Diagnostic::Expired);
    }

    #[tokio::test]
    async fn test_error_handler() {
        let err = Jwt::hs256()
            .on_error(|e| JwtError::invalid_claims(format!("wrapped: {e}")))
            .with_secret("k")
            .sign(json!("not an object"))
            .await
            .unwrap_err();
        assert!(matches!(err, JwtError::InvalidClaims(msg) if msg.starts_with("wrapped: ")));
    }

    #[test]
    fn test_decode_payload_is_sync() {
        let token = signer::sign(&json!({"sub": "x"}), "k", Algorithm::HS256).unwrap();
        let claims = Jwt::builder().decode_payload(&token).unwrap();
        assert_eq!(claims.get("sub"), Some(&json!("x")));
    }
}
