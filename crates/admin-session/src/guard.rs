//! Login guard and logout

use crate::config::AdminConfig;
use crate::navigation::Navigation;
use crate::storage::CredentialStore;
use tracing::{debug, info};

/// Sends visitors without a stored token to the login page
#[derive(Debug, Clone, Copy)]
pub struct SessionGuard<'a> {
    config: &'a AdminConfig,
}

impl<'a> SessionGuard<'a> {
    pub fn new(config: &'a AdminConfig) -> Self {
        Self { config }
    }

    /// `Stay` when a non-empty token is stored, otherwise a redirect to login
    pub fn check<S: CredentialStore + ?Sized>(&self, store: &S) -> Navigation {
        let has_token = store
            .get_item(&self.config.token_key)
            .is_some_and(|token| !token.is_empty());

        if has_token {
            debug!("Admin session token present");
            Navigation::Stay
        } else {
            info!(target_path = %self.config.login_path, "No admin session token, redirecting to login");
            Navigation::redirect(self.config.login_path.clone())
        }
    }
}

/// Clears the stored token and sends the visitor to the login page
#[derive(Debug, Clone, Copy)]
pub struct SessionTerminator<'a> {
    config: &'a AdminConfig,
}

impl<'a> SessionTerminator<'a> {
    pub fn new(config: &'a AdminConfig) -> Self {
        Self { config }
    }

    /// Remove the token, then always redirect to login
    pub fn terminate<S: CredentialStore + ?Sized>(&self, store: &S) -> Navigation {
        store.remove_item(&self.config.token_key);
        info!(target_path = %self.config.login_path, "Admin session cleared");
        Navigation::redirect(self.config.login_path.clone())
    }
}
