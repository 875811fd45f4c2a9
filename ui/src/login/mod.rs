//! Login form state and submit flow
//!
//! - **types**: form state, reducer actions, credentials and the lookup result
//! - **submit**: the asynchronous half of a submit, run after `begin_submit`

pub mod submit;
pub mod types;

pub use submit::perform_lookup;
pub use types::*;
