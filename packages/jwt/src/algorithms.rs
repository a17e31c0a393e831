//! Algorithm registry
//!
//! A closed, compiled-in mapping from JWT algorithm identifier to the SHA-2
//! primitive keyed by HMAC. There is no way to register an algorithm at
//! runtime; a new family means a new enum variant here.

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Supported signing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC using SHA-256
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
}

/// Hash function underlying an [`Algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashPrimitive {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl Algorithm {
    /// Every registered algorithm.
    pub const ALL: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    /// Header `alg` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Hash primitive keyed by this algorithm.
    #[must_use]
    pub const fn hash(self) -> HashPrimitive {
        match self {
            Algorithm::HS256 => HashPrimitive::Sha256,
            Algorithm::HS384 => HashPrimitive::Sha384,
            Algorithm::HS512 => HashPrimitive::Sha512,
        }
    }
}

impl HashPrimitive {
    /// Conventional name, e.g. `"SHA-256"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HashPrimitive::Sha256 => "SHA-256",
            HashPrimitive::Sha384 => "SHA-384",
            HashPrimitive::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            HashPrimitive::Sha256 => 32,
            HashPrimitive::Sha384 => 48,
            HashPrimitive::Sha512 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HashPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> JwtResult<Self> {
        lookup(s).ok_or_else(|| JwtError::unsupported_algorithm(s))
    }
}

/// Registry lookup by identifier. Case-sensitive.
#[must_use]
pub fn lookup(id: &str) -> Option<Algorithm> {
    Algorithm::ALL.into_iter().find(|alg| alg.as_str() == id)
}

/// Membership test for an identifier.
#[must_use]
pub fn is_supported(id: &str) -> bool {
    lookup(id).is_some()
}

/// Hash primitive for a registered algorithm.
#[must_use]
pub const fn hash_for(alg: Algorithm) -> HashPrimitive {
    alg.hash()
}
