//! Firewall result types
//!
//! Defines the outcome of a single authorization decision.

use std::fmt;

/// Why a connection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The peer address string did not parse as `address:port`.
    MalformedAddress,
    /// The address parsed but no configured prefix contains it.
    NotInAllowedPrefix,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::MalformedAddress => write!(f, "malformed address"),
            DenyReason::NotInAllowedPrefix => write!(f, "not in any allowed prefix"),
        }
    }
}

/// Result of evaluating a peer address against the allowlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Authorized,
    Denied(DenyReason),
}

impl Decision {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Decision::Authorized)
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Authorized => None,
            Decision::Denied(reason) => Some(*reason),
        }
    }
}
