//! iPay88 checkout bridge
//!
//! Signs outbound iPay88 payment requests as auto-submitting HTML forms and
//! relays the gateway's payment callbacks to its verification API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::configure;
pub use modules::gateways;
pub use modules::payments;
pub use modules::transactions;
