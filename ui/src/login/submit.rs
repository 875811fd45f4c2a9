use tracing::{info, instrument, warn};

use super::types::{Credentials, LoginAction};
use crate::services::lookup::UserLookupService;

/// Run the lookup for a submit started with `LoginFormState::begin_submit`.
///
/// Always resolves to a completion action, so the loading flag is cleared
/// whether the lookup succeeds or fails.
#[instrument(skip_all, fields(username = %credentials.username))]
pub async fn perform_lookup(
    lookup: &dyn UserLookupService,
    credentials: Credentials,
) -> LoginAction {
    match lookup.fetch_current_user(&credentials).await {
        Ok(user) => {
            info!("Lookup succeeded for user id {}", user.id);
            LoginAction::LookupSucceeded(user)
        }
        Err(e) => {
            warn!("Lookup failed: {}", e);
            LoginAction::LookupFailed(e.user_message())
        }
    }
}
