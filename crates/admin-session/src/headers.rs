//! Authenticated request headers

use crate::config::AdminConfig;
use crate::error::Result;
use crate::storage::CredentialStore;
use http::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

/// Content type sent with every admin API request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// What the page script sent in place of a missing token
const ABSENT_TOKEN: &str = "null";

const CONTENT_TYPE_NAME: &str = "Content-Type";
const AUTHORIZATION_NAME: &str = "Authorization";

/// Headers attached to admin API requests
///
/// Serializes to `{"Content-Type": ..., "Authorization": ...}`, the shape
/// `fetch` expects for its `headers` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthHeaders {
    #[serde(rename = "Content-Type")]
    content_type: &'static str,
    #[serde(rename = "Authorization")]
    authorization: String,
}

impl AuthHeaders {
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Header name/value pairs, `Content-Type` first
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (CONTENT_TYPE_NAME, self.content_type),
            (AUTHORIZATION_NAME, self.authorization.as_str()),
        ]
        .into_iter()
    }

    /// Convert into an [`http::HeaderMap`] for Rust HTTP clients
    ///
    /// The `Authorization` value is marked sensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored token contains bytes not allowed in a header
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&self.authorization)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        headers.insert(header::AUTHORIZATION, authorization);
        Ok(headers)
    }
}

/// Builds [`AuthHeaders`] from the stored credential token
#[derive(Debug, Clone, Copy)]
pub struct AuthHeaderBuilder<'a> {
    config: &'a AdminConfig,
}

impl<'a> AuthHeaderBuilder<'a> {
    pub fn new(config: &'a AdminConfig) -> Self {
        Self { config }
    }

    /// Read the token and build the headers. Never fails; a missing token is
    /// rendered as `Bearer null`.
    pub fn build<S: CredentialStore + ?Sized>(&self, store: &S) -> AuthHeaders {
        let token = store.get_item(&self.config.token_key);
        debug!(
            token_key = %self.config.token_key,
            token_present = token.is_some(),
            "Building admin request headers"
        );

        AuthHeaders {
            content_type: JSON_CONTENT_TYPE,
            authorization: format!("Bearer {}", token.as_deref().unwrap_or(ABSENT_TOKEN)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use crate::storage::MemoryStore;

    fn build(store: &MemoryStore) -> AuthHeaders {
        AuthHeaderBuilder::new(&AdminConfig::default()).build(store)
    }

    #[test]
    fn test_stored_token_becomes_bearer() {
        let headers = build(&MemoryStore::with_item("token", "abc123"));

        assert_eq!(headers.content_type(), "application/json");
        assert_eq!(headers.authorization(), "Bearer abc123");
    }

    #[test]
    fn test_missing_token_renders_null() {
        let headers = build(&MemoryStore::new());

        assert_eq!(headers.content_type(), "application/json");
        assert_eq!(headers.authorization(), "Bearer null");
    }

    #[test]
    fn test_empty_token_is_sent_as_is() {
        let headers = build(&MemoryStore::with_item("token", ""));
        assert_eq!(headers.authorization(), "Bearer ");
    }

    #[test]
    fn test_reads_configured_key() {
        let config = AdminConfig::default().with_token_key("admin_token");
        let store = MemoryStore::with_item("token", "wrong");
        store.set_item("admin_token", "right");

        let headers = AuthHeaderBuilder::new(&config).build(&store);
        assert_eq!(headers.authorization(), "Bearer right");
    }

    #[test]
    fn test_build_does_not_touch_store() {
        let store = MemoryStore::with_item("token", "abc123");
        let _ = build(&store);
        let _ = build(&store);

        assert_eq!(store.get_item("token").as_deref(), Some("abc123"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_iter_order() {
        let headers = build(&MemoryStore::with_item("token", "abc123"));
        let pairs: Vec<_> = headers.iter().collect();

        assert_eq!(
            pairs,
            vec![
                ("Content-Type", "application/json"),
                ("Authorization", "Bearer abc123"),
            ]
        );
    }

    #[test]
    fn test_serializes_as_fetch_headers() {
        let headers = build(&MemoryStore::with_item("token", "abc123"));
        let json = serde_json::to_value(&headers).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "Content-Type": "application/json",
                "Authorization": "Bearer abc123",
            })
        );
    }

    #[test]
    fn test_header_map_marks_authorization_sensitive() {
        let headers = build(&MemoryStore::with_item("token", "abc123"));
        let map = headers.to_header_map().unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map[header::CONTENT_TYPE], "application/json");
        assert_eq!(map[header::AUTHORIZATION], "Bearer abc123");
        assert!(map[header::AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_header_map_rejects_control_characters() {
        let headers = build(&MemoryStore::with_item("token", "abc\n123"));

        assert!(matches!(
            headers.to_header_map(),
            Err(SessionError::InvalidHeaderValue(_))
        ));
    }
}
