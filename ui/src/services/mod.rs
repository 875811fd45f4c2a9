//! Infrastructure Services
//!
//! - **lookup**: the user lookup collaborator trait, its shared handle and the HTTP implementation
//! - **config**: login configuration and the global settings accessor
//!
//! The services are WASM-first, using async traits without Send/Sync bounds.

pub mod config;
pub mod lookup;
