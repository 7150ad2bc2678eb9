// Test Helper Modules for Real Endpoint Testing
//
// Every suite talks to real HTTP servers started with actix-test: the bridge
// itself and, for callback tests, a stub of the iPay88 verification API.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod assertions;
pub mod gateway_stub;

// Re-export commonly used types and functions
pub use assertions::*;
pub use gateway_stub::*;
pub use test_data::*;
pub use test_server::*;
