//! Server core functionality
//!
//! Binds the listener and serves the gated HTTP application.

pub mod core;

pub use self::core::Server;
