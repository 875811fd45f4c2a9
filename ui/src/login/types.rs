use std::fmt;

use serde::{Deserialize, Serialize};

use crate::services::config::Captions;

/// User record returned by the lookup collaborator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub id: u64,
    pub name: String,
}

/// Username and password captured at submit time
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum LoginAction {
    SetUsername(String),
    SetPassword(String),
    // Lookup completion, both variants clear the loading flag
    LookupSucceeded(LookupResult),
    LookupFailed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub loading: bool,
    pub display_name: Option<String>,
    pub error_message: Option<String>,
}

impl LoginFormState {
    /// Both fields must be non-empty for the submit button to be enabled
    pub fn submit_enabled(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn submit_caption<'a>(&self, captions: &'a Captions) -> &'a str {
        if self.loading {
            &captions.waiting
        } else {
            &captions.submit
        }
    }

    pub fn error_visible(&self) -> bool {
        self.error_message.is_some()
    }

    /// Start a submit if the form allows one.
    ///
    /// Returns the credentials to send, or `None` when a field is empty or a
    /// lookup is already in flight. On success the state is switched to
    /// loading and any previous error is cleared.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.submit_enabled() || self.loading {
            return None;
        }

        self.loading = true;
        self.error_message = None;

        Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetUsername(username) => {
                self.username = username;
            }
            LoginAction::SetPassword(password) => {
                self.password = password;
            }
            LoginAction::LookupSucceeded(result) => {
                self.display_name = Some(result.name);
                self.error_message = None;
                self.loading = false;
            }
            LoginAction::LookupFailed(message) => {
                self.error_message = Some(message);
                self.loading = false;
            }
        }
    }
}
