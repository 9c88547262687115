pub mod config;
pub mod error;
pub mod firewall;
pub mod gate;
pub mod middleware;
pub mod server;
pub mod storage;

pub use firewall::AddressAllowlist;
pub use server::Server;
