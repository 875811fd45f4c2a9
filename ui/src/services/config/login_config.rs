//! Configuration for the login form and its lookup service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Captions shown on the submit button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Captions {
    /// Shown while no lookup is pending
    pub submit: String,

    /// Shown while a lookup is in flight
    pub waiting: String,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            submit: "Login".to_string(),
            waiting: "please wait".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Endpoint answering the current-user lookup
    pub lookup_url: String,

    /// User agent sent with lookup requests
    pub user_agent: String,

    pub captions: Captions,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            lookup_url: "https://jsonplaceholder.typicode.com/users/1".to_string(),
            user_agent: "login-form/0.1".to_string(),
            captions: Captions::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl LoginConfig {
    /// Parse a JSON document, filling missing fields from defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Check the configuration, reporting every problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let url = self.lookup_url.trim();
        if url.is_empty() {
            errors.push("lookup_url must not be empty".to_string());
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("lookup_url must be an http(s) URL, got '{}'", url));
        }

        if self.user_agent.trim().is_empty() {
            errors.push("user_agent must not be empty".to_string());
        }

        if self.captions.submit.trim().is_empty() {
            errors.push("captions.submit must not be empty".to_string());
        }

        if self.captions.waiting.trim().is_empty() {
            errors.push("captions.waiting must not be empty".to_string());
        }

        if !self.captions.submit.is_empty() && self.captions.submit == self.captions.waiting {
            errors.push("captions.submit and captions.waiting must differ".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = LoginConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let mut config = LoginConfig::default();
        config.lookup_url = "ftp://example.com".to_string();
        config.captions.waiting = "Login".to_string();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = LoginConfig::from_json(r#"{"lookup_url": "http://localhost:3000/me"}"#).unwrap();
        assert_eq!(config.lookup_url, "http://localhost:3000/me");
        assert_eq!(config.captions, Captions::default());
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let result = LoginConfig::from_json(r#"{"captions": {"submit": "", "waiting": ""}}"#);
        match result {
            Err(ConfigError::Invalid(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected invalid config, got {:?}", other),
        }

        assert!(matches!(
            LoginConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
