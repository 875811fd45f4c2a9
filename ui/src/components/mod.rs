//! User Interface Components
//!
//! Dioxus components for the login page:
//!
//! - **forms**: the stateful `LoginForm` and its presentational `LoginFormView`
//! - **display**: error region and signed-in greeting
//! - **inputs**: labeled text and password inputs

pub mod display;
pub mod forms;
pub mod inputs;

pub use forms::LoginForm;
