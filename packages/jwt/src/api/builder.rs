//! JWT builder API - entry point structs and configuration methods

use crate::{
    algorithms::Algorithm,
    clock::{Clock, SystemClock},
    error::JwtError,
};
use std::sync::Arc;
use zeroize::Zeroizing;

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// Builder with the default algorithm (HS256)
    #[inline]
    #[must_use]
    pub fn builder() -> JwtBuilder {
        JwtBuilder::new()
    }

    /// Builder for HS256 tokens
    #[inline]
    #[must_use]
    pub fn hs256() -> JwtBuilder {
        JwtBuilder::new().with_algorithm(Algorithm::HS256)
    }

    /// Builder for HS384 tokens
    #[inline]
    #[must_use]
    pub fn hs384() -> JwtBuilder {
        JwtBuilder::new().with_algorithm(Algorithm::HS384)
    }

    /// Builder for HS512 tokens
    #[inline]
    #[must_use]
    pub fn hs512() -> JwtBuilder {
        JwtBuilder::new().with_algorithm(Algorithm::HS512)
    }
}

/// Unified JWT builder
///
/// The secret is wiped from memory when the builder, or the task it was
/// handed to, is dropped.
pub struct JwtBuilder {
    pub(crate) algorithm: Algorithm,
    pub(crate) secret: Option<Zeroizing<Vec<u8>>>,
    pub(crate) clock: Arc<dyn Clock>,
}

/// JWT builder whose errors pass through a handler
pub struct JwtBuilderWithError<E> {
    pub(crate) inner: JwtBuilder,
    pub(crate) error_handler: E,
}

impl Default for JwtBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JwtBuilder {
    /// Create new JWT builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::HS256,
            secret: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Algorithm used for signing
    #[inline]
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Set signing algorithm
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set shared secret
    #[inline]
    #[must_use]
    pub fn with_secret(mut self, secret: impl AsRef<[u8]>) -> Self {
        self.secret = Some(Zeroizing::new(secret.as_ref().to_vec()));
        self
    }

    /// Set the clock used for `exp`/`nbf` checks
    #[inline]
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Route every error of subsequent operations through `handler`
    #[inline]
    pub fn on_error<E>(self, handler: E) -> JwtBuilderWithError<E>
    where
        E: Fn(JwtError) -> JwtError + Send + Sync + Unpin + 'static,
    {
        JwtBuilderWithError {
            inner: self,
            error_handler: handler,
        }
    }
}

impl<E> JwtBuilderWithError<E>
where
    E: Fn(JwtError) -> JwtError + Send + Sync + Unpin + 'static,
{
    /// Set signing algorithm
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.inner = self.inner.with_algorithm(algorithm);
        self
    }

    /// Set shared secret
    #[inline]
    #[must_use]
    pub fn with_secret(mut self, secret: impl AsRef<[u8]>) -> Self {
        self.inner = self.inner.with_secret(secret);
        self
    }

    /// Set the clock used for `exp`/`nbf` checks
    #[inline]
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.inner = self.inner.with_clock(clock);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_builder_defaults() {
        let builder = Jwt::builder();
        assert_eq!(builder.algorithm(), Algorithm::HS256);
        assert!(builder.secret.is_none());
    }

    #[test]
    fn test_algorithm_shortcuts() {
        assert_eq!(Jwt::hs256().algorithm(), Algorithm::HS256);
        assert_eq!(Jwt::hs384().algorithm(), Algorithm::HS384);
        assert_eq!(Jwt::hs512().algorithm(), Algorithm::HS512);
    }

    #[test]
    fn test_configuration_is_kept() {
        let builder = Jwt::hs384()
            .with_secret("k")
            .with_clock(FixedClock::from_timestamp(5));
        assert_eq!(builder.secret.as_deref().map(Vec::as_slice), Some(&b"k"[..]));
        assert_eq!(builder.clock.now().timestamp(), 5);
    }
}
