//! Target classification lens
//!
//! Decides whether a raw user-supplied string is a phone number, an IP
//! address, or neither.
//!
//! # Detection rules
//!
//! - Parse as an internationally formatted phone number (no default region).
//!   Only a number that also passes the strict validity check is a phone;
//!   a parseable but invalid number falls through.
//! - Otherwise parse as an IPv4 or IPv6 literal.
//! - Everything else is invalid.
//!
//! # Example
//!
//! ```rust,ignore
//! use phoneq::lens::target::{TargetLens, TargetKind};
//!
//! let lens = TargetLens::new();
//! let identity = lens.classify("8.8.8.8");
//! assert_eq!(identity.kind(), TargetKind::Ip);
//! ```

use phonenumber::PhoneNumber;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

// =============================================================================
// Types
// =============================================================================

/// Kind of target detected from input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Phone,
    Ip,
    Invalid,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Phone => write!(f, "phone"),
            TargetKind::Ip => write!(f, "ip"),
            TargetKind::Invalid => write!(f, "invalid"),
        }
    }
}

/// Classified form of the raw input. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    Phone { number: PhoneNumber, raw: String },
    Ip { address: IpAddr, raw: String },
    Invalid { raw: String },
}

impl Identity {
    pub fn kind(&self) -> TargetKind {
        match self {
            Identity::Phone { .. } => TargetKind::Phone,
            Identity::Ip { .. } => TargetKind::Ip,
            Identity::Invalid { .. } => TargetKind::Invalid,
        }
    }

    /// The original string exactly as supplied
    pub fn raw(&self) -> &str {
        match self {
            Identity::Phone { raw, .. } | Identity::Ip { raw, .. } | Identity::Invalid { raw } => {
                raw
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Identity::Invalid { .. })
    }
}

// =============================================================================
// Errors
// =============================================================================

/// The raw target is neither a valid phone number nor an IP address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationError {
    pub target: String,
}

impl std::fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid target: {}", self.target)
    }
}

impl std::error::Error for ClassificationError {}

// =============================================================================
// Lens
// =============================================================================

/// Target classification lens
#[derive(Debug, Default, Clone, Copy)]
pub struct TargetLens;

impl TargetLens {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw string. Pure and deterministic.
    pub fn classify(&self, raw: &str) -> Identity {
        if let Some(number) = self.parse_phone(raw) {
            return Identity::Phone {
                number,
                raw: raw.to_string(),
            };
        }

        if let Ok(address) = raw.parse::<IpAddr>() {
            return Identity::Ip {
                address,
                raw: raw.to_string(),
            };
        }

        Identity::Invalid {
            raw: raw.to_string(),
        }
    }

    /// Classify and reject invalid input
    pub fn classify_strict(&self, raw: &str) -> Result<Identity, ClassificationError> {
        match self.classify(raw) {
            Identity::Invalid { raw } => Err(ClassificationError { target: raw }),
            identity => Ok(identity),
        }
    }

    fn parse_phone(&self, raw: &str) -> Option<PhoneNumber> {
        let number = phonenumber::parse(None, raw).ok()?;
        if phonenumber::is_valid(&number) {
            Some(number)
        } else {
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_phone() {
        let lens = TargetLens::new();
        let identity = lens.classify("+14155552671");
        assert_eq!(identity.kind(), TargetKind::Phone);
        assert_eq!(identity.raw(), "+14155552671");

        assert_eq!(lens.classify("+33 1 42 68 53 00").kind(), TargetKind::Phone);
    }

    #[test]
    fn test_classify_ip() {
        let lens = TargetLens::new();
        match lens.classify("8.8.8.8") {
            Identity::Ip { address, raw } => {
                assert_eq!(address, "8.8.8.8".parse::<IpAddr>().unwrap());
                assert_eq!(raw, "8.8.8.8");
            }
            other => panic!("expected ip, got {:?}", other),
        }
        assert_eq!(lens.classify("2001:4860:4860::8888").kind(), TargetKind::Ip);
        assert_eq!(lens.classify("::1").kind(), TargetKind::Ip);
    }

    #[test]
    fn test_classify_invalid() {
        let lens = TargetLens::new();
        assert_eq!(lens.classify("not-a-target").kind(), TargetKind::Invalid);
        assert_eq!(lens.classify("").kind(), TargetKind::Invalid);
        assert_eq!(lens.classify("1.1.1.0/24").kind(), TargetKind::Invalid);
        assert_eq!(lens.classify("999.1.1.1").kind(), TargetKind::Invalid);
    }

    #[test]
    fn test_national_number_without_region_is_invalid() {
        // No default region is supplied, so a bare national number cannot parse
        let lens = TargetLens::new();
        assert_eq!(lens.classify("4155552671").kind(), TargetKind::Invalid);
    }

    #[test]
    fn test_possible_but_invalid_number_falls_through() {
        let lens = TargetLens::new();
        // wrong length for the US numbering plan
        assert_eq!(lens.classify("+1415555").kind(), TargetKind::Invalid);
    }

    #[test]
    fn test_classify_strict() {
        let lens = TargetLens::new();
        assert!(lens.classify_strict("8.8.8.8").is_ok());
        let err = lens.classify_strict("nope").unwrap_err();
        assert_eq!(err.target, "nope");
        assert_eq!(err.to_string(), "Invalid target: nope");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let lens = TargetLens::new();
        for input in ["+14155552671", "8.8.8.8", "garbage"] {
            assert_eq!(lens.classify(input), lens.classify(input));
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TargetKind::Phone.to_string(), "phone");
        assert_eq!(TargetKind::Ip.to_string(), "ip");
        assert_eq!(TargetKind::Invalid.to_string(), "invalid");
    }
}
