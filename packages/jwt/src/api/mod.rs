//! Async builder API
//!
//! `Jwt::hs256().with_secret(..).sign(claims).await` and friends. Work runs on
//! a spawned Tokio task; the returned future is the only suspension point.

pub mod builder;
pub mod operations;
pub mod validation;

pub use builder::{Jwt, JwtBuilder, JwtBuilderWithError};
pub use validation::{AsyncJwtResult, AsyncJwtResultWithError};
