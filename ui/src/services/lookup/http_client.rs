use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::LookupError;
use super::traits::UserLookupService;
use crate::login::{Credentials, LookupResult};
use crate::services::config::LoginConfig;

/// Lookup collaborator backed by an HTTP GET endpoint
#[derive(Clone, Debug)]
pub struct HttpUserLookup {
    http_client: Client,
    lookup_url: String,
}

impl HttpUserLookup {
    pub fn new(config: &LoginConfig) -> Result<Self, LookupError> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LookupError::Network {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            lookup_url: config.lookup_url.clone(),
        })
    }
}

#[async_trait(?Send)]
impl UserLookupService for HttpUserLookup {
    #[instrument(skip(self, credentials), fields(username = %credentials.username), err)]
    async fn fetch_current_user(
        &self,
        credentials: &Credentials,
    ) -> Result<LookupResult, LookupError> {
        info!("Fetching current user from {}", self.lookup_url);

        let response = self
            .http_client
            .get(&self.lookup_url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Network {
                message: format!("Failed to call lookup endpoint: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Lookup endpoint rejected request with status {}", status);
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        let user = decode_lookup_result(&body)?;
        info!("Lookup resolved user id {}", user.id);
        Ok(user)
    }
}

/// Decode a lookup payload, ignoring fields the form does not use
pub fn decode_lookup_result(body: &str) -> Result<LookupResult, LookupError> {
    Ok(serde_json::from_str(body)?)
}
