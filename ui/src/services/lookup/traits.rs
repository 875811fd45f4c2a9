//! Seam between the login form and whatever answers "who is this user"

use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;

use super::errors::LookupError;
use crate::login::{Credentials, LookupResult};

/// User lookup collaborator - WASM-only, so no Send bound
#[async_trait(?Send)]
pub trait UserLookupService {
    /// Fetch the user identified by the submitted credentials
    async fn fetch_current_user(
        &self,
        credentials: &Credentials,
    ) -> Result<LookupResult, LookupError>;
}

/// Shared handle to a lookup service, provided to components through context
#[derive(Clone)]
pub struct LookupHandle(Rc<dyn UserLookupService>);

impl LookupHandle {
    pub fn new(service: impl UserLookupService + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl From<Rc<dyn UserLookupService>> for LookupHandle {
    fn from(service: Rc<dyn UserLookupService>) -> Self {
        Self(service)
    }
}

impl Deref for LookupHandle {
    type Target = dyn UserLookupService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

// Identity comparison, two handles are equal when they share the same service
impl PartialEq for LookupHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubLookup;
    use super::*;

    #[test]
    fn test_handle_equality_is_identity() {
        let handle = LookupHandle::new(StubLookup::john());
        let same = handle.clone();
        let other = LookupHandle::new(StubLookup::john());

        assert!(handle == same);
        assert!(handle != other);
    }

    #[tokio::test]
    async fn test_handle_derefs_to_service() {
        let handle = LookupHandle::new(StubLookup::john());
        let credentials = Credentials {
            username: "test".to_string(),
            password: "test".to_string(),
        };

        let result = handle.fetch_current_user(&credentials).await.unwrap();
        assert_eq!(result.name, "John");
    }
}
