pub mod login_form;
pub mod login_form_view;

pub use login_form::LoginForm;
pub use login_form_view::{LoginFormView, LoginFormViewProps};
