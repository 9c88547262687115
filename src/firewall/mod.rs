//! Access-control firewall
//!
//! Decides whether a connection's source address may use the service.

pub mod allowlist;
pub mod results;

pub use allowlist::AddressAllowlist;
pub use results::{Decision, DenyReason};
