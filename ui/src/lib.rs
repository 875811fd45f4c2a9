//! This crate contains the login form component, its lookup service seam
//! and the configuration shared with the web entry point.

pub mod components;
pub mod login;
pub mod services;
pub mod utils;

pub use components::LoginForm;
pub use services::config::LoginConfig;
pub use services::lookup::{HttpUserLookup, LookupHandle, UserLookupService};
