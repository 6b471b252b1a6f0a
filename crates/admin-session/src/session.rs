//! Admin session bound to one configuration and one credential store

use crate::config::AdminConfig;
use crate::guard::{SessionGuard, SessionTerminator};
use crate::headers::{AuthHeaderBuilder, AuthHeaders};
use crate::navigation::Navigation;
use crate::storage::CredentialStore;

/// Session helpers for admin pages
#[derive(Debug)]
pub struct AdminSession<S> {
    config: AdminConfig,
    store: S,
}

impl<S: CredentialStore> AdminSession<S> {
    pub fn new(config: AdminConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Headers for an authenticated API request
    pub fn headers(&self) -> AuthHeaders {
        AuthHeaderBuilder::new(&self.config).build(&self.store)
    }

    /// Whether the current page may be shown
    pub fn guard(&self) -> Navigation {
        SessionGuard::new(&self.config).check(&self.store)
    }

    /// Forget the token and head back to login
    pub fn logout(&self) -> Navigation {
        SessionTerminator::new(&self.config).terminate(&self.store)
    }

    /// Absolute URL of `path` on the API origin
    pub fn api_url(&self, path: &str) -> String {
        self.config.api_url(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_session_reads_through_borrowed_store() {
        let store = MemoryStore::with_item("token", "abc123");
        let session = AdminSession::new(AdminConfig::default(), &store);

        assert_eq!(session.headers().authorization(), "Bearer abc123");
        assert_eq!(session.guard(), Navigation::Stay);

        session.logout();
        assert!(store.is_empty());
    }

    #[test]
    fn test_api_url_uses_configured_origin() {
        let session = AdminSession::new(AdminConfig::production(), MemoryStore::new());
        assert_eq!(
            session.api_url("/admin/user-list"),
            "https://wecarehhcs.in/admin/user-list"
        );
    }
}
