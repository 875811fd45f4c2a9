mod login_config;

use crate::console_warn;

pub use login_config::*;

use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<LoginConfig> = OnceLock::new();

/// Install the configuration used by the app. Only the first call wins.
pub fn init_global_config(config: LoginConfig) -> LoginConfig {
    GLOBAL_CONFIG
        .get_or_init(|| match config.validate() {
            Ok(()) => config,
            Err(errors) => {
                console_warn!("Invalid configuration: {}", errors.join("; "));
                LoginConfig::default()
            }
        })
        .clone()
}

/// Parse a configuration document, falling back to defaults when it is unusable
pub fn load_config(json: &str) -> LoginConfig {
    match LoginConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            console_warn!("Ignoring login configuration: {}", e);
            LoginConfig::default()
        }
    }
}

/// Get the global configuration, initialized with defaults
pub fn get_global_config() -> LoginConfig {
    GLOBAL_CONFIG.get_or_init(LoginConfig::default).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_reads_document() {
        let config = load_config(
            r#"{"lookup_url": "https://example.com/me", "captions": {"waiting": "hold on"}}"#,
        );
        assert_eq!(config.lookup_url, "https://example.com/me");
        assert_eq!(config.captions.waiting, "hold on");
        assert_eq!(config.captions.submit, "Login");
    }

    #[test]
    fn test_load_config_falls_back_to_defaults() {
        assert_eq!(load_config("{broken"), LoginConfig::default());
        assert_eq!(
            load_config(r#"{"lookup_url": "ftp://example.com"}"#),
            LoginConfig::default()
        );
    }
}
