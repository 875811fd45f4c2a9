pub mod error_message;
pub mod greeting;

pub use error_message::*;
pub use greeting::*;
