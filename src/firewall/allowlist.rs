//! Source address allowlist
//!
//! Parses a list of CIDR prefixes once at startup and answers, per connection,
//! whether the peer address falls inside any of them. An allowlist with no
//! prefixes permits everything, including peer strings that do not parse.

use std::net::SocketAddr;
use std::str::FromStr;

use ipnet::IpNet;
use log::{debug, info};

use super::results::{Decision, DenyReason};
use crate::error::FirewallError;

/// Immutable set of allowed network prefixes.
///
/// Safe to share across request tasks behind an `Arc`; evaluation never mutates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressAllowlist {
    prefixes: Vec<IpNet>,
}

impl AddressAllowlist {
    /// Builds an allowlist from a comma and/or whitespace separated list of prefixes.
    ///
    /// An input with no tokens yields the permit-all allowlist. Any token that is
    /// not a valid IPv4 or IPv6 prefix fails the whole construction.
    pub fn new(raw: &str) -> Result<Self, FirewallError> {
        let mut prefixes = Vec::new();

        for token in tokens(raw) {
            if token.split_once('/').is_some_and(|(_, bits)| !is_canonical_length(bits)) {
                return Err(FirewallError::InvalidPrefixLength {
                    token: token.to_string(),
                });
            }
            let prefix = token
                .parse::<IpNet>()
                .map_err(|source| FirewallError::InvalidPrefix {
                    token: token.to_string(),
                    source,
                })?;
            info!("Parsed prefix {}", prefix);
            prefixes.push(prefix);
        }

        Ok(Self { prefixes })
    }

    /// Allowlist with no prefixes: every decision is authorized.
    pub fn permit_all() -> Self {
        Self::default()
    }

    pub fn is_permit_all(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn prefixes(&self) -> &[IpNet] {
        &self.prefixes
    }

    /// Evaluates a raw `address:port` string (IPv6 in brackets).
    pub fn evaluate(&self, raw_addr_port: &str) -> Decision {
        if self.is_permit_all() {
            return Decision::Authorized;
        }

        let addr = match raw_addr_port.parse::<SocketAddr>() {
            Ok(addr_port) => addr_port.ip(),
            Err(_) => {
                info!("Rejecting malformed address {:?}", raw_addr_port);
                return Decision::Denied(DenyReason::MalformedAddress);
            }
        };

        if self.prefixes.iter().any(|prefix| prefix.contains(&addr)) {
            Decision::Authorized
        } else {
            debug!("Address {} is not in any allowed prefix", addr);
            Decision::Denied(DenyReason::NotInAllowedPrefix)
        }
    }

    /// Boolean form of [`evaluate`](Self::evaluate). Never fails.
    pub fn is_authorized(&self, raw_addr_port: &str) -> bool {
        self.evaluate(raw_addr_port).is_authorized()
    }
}

impl FromStr for AddressAllowlist {
    type Err = FirewallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Splits on commas and whitespace, treating runs of separators as one.
fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Prefix lengths are plain decimal: no sign and no leading zeros.
fn is_canonical_length(bits: &str) -> bool {
    !bits.is_empty()
        && bits.bytes().all(|b| b.is_ascii_digit())
        && (bits == "0" || !bits.starts_with('0'))
}
