//! JWT type definitions

use crate::algorithms::{self, Algorithm};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token type carried in every header this crate produces.
pub const TOKEN_TYPE: &str = "JWT";

/// JWT claims: an arbitrary JSON object.
///
/// Only `exp` and `nbf` carry meaning during verification. Key order is
/// preserved so that re-encoding decoded claims reproduces the bytes that
/// were signed.
pub type Claims = serde_json::Map<String, serde_json::Value>;

/// JWT header structure
///
/// Field order matters: it fixes the serialized form `{"alg":..,"typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Header {
    /// Algorithm identifier, e.g. `"HS256"`
    pub alg: String,
    /// Token type, always `"JWT"` for headers built here
    pub typ: String,
}

impl Header {
    /// Header for a token signed with `alg`.
    #[must_use]
    pub fn new(alg: Algorithm) -> Self {
        Self {
            alg: alg.as_str().to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Header as read off an incoming token.
///
/// Only `alg` and `typ` may appear. `alg` may be absent or of any JSON type;
/// `typ` may be absent but must be `"JWT"` when present.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReceivedHeader {
    #[serde(default)]
    alg: Value,
    #[serde(default)]
    typ: Option<String>,
}

impl ReceivedHeader {
    pub(crate) fn is_jwt(&self) -> bool {
        self.typ.as_deref().map_or(true, |typ| typ == TOKEN_TYPE)
    }

    /// Registered algorithm named by `alg`, if any.
    pub(crate) fn algorithm(&self) -> Option<Algorithm> {
        self.alg.as_str().and_then(algorithms::lookup)
    }
}
