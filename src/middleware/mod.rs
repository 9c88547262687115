//! Server middleware
//!
//! Provides request logging and the source address firewall.

pub mod firewall;
pub mod logging;

pub use firewall::firewall_guard;
pub use logging::log_request;
