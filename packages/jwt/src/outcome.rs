//! Verification diagnostics
//!
//! Exactly one [`Diagnostic`] is produced per verification or decode attempt:
//! the first gate that fails decides it. Match on the variant, not on the
//! message text.

use serde::{Serialize, Serializer};
use std::fmt;

/// Result of a single validation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// Not exactly three non-empty dot-separated segments
    Format,
    /// Header segment is not base64url JSON of the expected shape
    HeaderEncoding,
    /// Payload segment is not base64url JSON object
    PayloadEncoding,
    /// `nbf` lies in the future
    NotYetValid,
    /// `exp` lies in the past
    Expired,
    /// Header names an algorithm outside the registry
    UnsupportedAlg,
    /// Signature does not match
    Invalid,
    /// Every gate passed
    Valid,
}

impl Diagnostic {
    /// Human-readable description.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Diagnostic::Format => "Token isn't in header.payload.signature format",
            Diagnostic::HeaderEncoding => "The header isn't in a valid format to decode",
            Diagnostic::PayloadEncoding => "The payload isn't in a valid format to decode",
            Diagnostic::NotYetValid => "This token isn't valid yet",
            Diagnostic::Expired => "This token is expired",
            Diagnostic::UnsupportedAlg => "Token header doesn't have a valid signing algorithm",
            Diagnostic::Invalid => "This token is invalid",
            Diagnostic::Valid => "This token is valid",
        }
    }

    /// Only [`Diagnostic::Valid`] is a pass.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Diagnostic::Valid)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Diagnostic {}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Tagged verification result.
///
/// Serializes as `{"status": bool, "msg": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    #[serde(rename = "status")]
    valid: bool,
    #[serde(rename = "msg")]
    reason: Diagnostic,
}

impl VerificationOutcome {
    /// Passing outcome.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            reason: Diagnostic::Valid,
        }
    }

    /// Failing outcome for the gate that rejected the token.
    #[must_use]
    pub const fn rejected(reason: Diagnostic) -> Self {
        Self {
            valid: reason.is_valid(),
            reason,
        }
    }

    /// Whether the token passed every gate.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Deciding diagnostic.
    #[must_use]
    pub const fn diagnostic(&self) -> Diagnostic {
        self.reason
    }

    /// Message of the deciding diagnostic.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.reason.message()
    }
}

impl From<Diagnostic> for VerificationOutcome {
    fn from(reason: Diagnostic) -> Self {
        Self::rejected(reason)
    }
}

impl From<VerificationOutcome> for bool {
    fn from(outcome: VerificationOutcome) -> Self {
        outcome.valid
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reason, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_serialization() {
        let outcome = VerificationOutcome::valid();
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!({"status": true, "msg": "This token is valid"})
        );

        let outcome = VerificationOutcome::rejected(Diagnostic::Expired);
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            json!({"status": false, "msg": "This token is expired"})
        );
    }

    #[test]
    fn test_only_valid_passes() {
        let all = [
            Diagnostic::Format,
            Diagnostic::HeaderEncoding,
            Diagnostic::PayloadEncoding,
            Diagnostic::NotYetValid,
            Diagnostic::Expired,
            Diagnostic::UnsupportedAlg,
            Diagnostic::Invalid,
        ];
        for diagnostic in all {
            let outcome = VerificationOutcome::from(diagnostic);
            assert!(!outcome.is_valid());
            assert!(!bool::from(outcome));
        }
        assert!(bool::from(VerificationOutcome::from(Diagnostic::Valid)));
    }
}
