use thiserror::Error;

/// Shown in the error region whenever a lookup fails
pub const LOOKUP_FAILURE_MESSAGE: &str = "Something went wrong!";

/// Failures of the user lookup collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Lookup endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Failed to decode lookup response: {message}")]
    Decode { message: String },
}

impl LookupError {
    /// Text for the form's error region. Details stay in the logs.
    pub fn user_message(&self) -> String {
        LOOKUP_FAILURE_MESSAGE.to_string()
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            LookupError::Decode {
                message: error.to_string(),
            }
        } else if let Some(status) = error.status() {
            LookupError::Status {
                status: status.as_u16(),
            }
        } else {
            LookupError::Network {
                message: error.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(error: serde_json::Error) -> Self {
        LookupError::Decode {
            message: error.to_string(),
        }
    }
}
