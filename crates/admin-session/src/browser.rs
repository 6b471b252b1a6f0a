//! Browser bindings: `localStorage`, `window.location` and the JS exports
//! admin pages call (`headers()`, `guard()`, `logout()`).

use crate::config::AdminConfig;
use crate::error::{Result, SessionError};
use crate::navigation::Navigator;
use crate::session::AdminSession;
use crate::storage::CredentialStore;
use tracing::warn;
use wasm_bindgen::prelude::*;

/// Credential store backed by `window.localStorage`
///
/// Without a storage handle (no window, sandboxed frame, blocked site data)
/// reads return no token and writes are dropped.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Store over the page's `localStorage`
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage is unavailable, admin session token cannot be read");
        }
        Self::new(storage)
    }

    pub fn new(storage: Option<web_sys::Storage>) -> Self {
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl CredentialStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, ?err, "Failed to read from localStorage");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            warn!(key, "localStorage is unavailable, write dropped");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            warn!(key, ?err, "Failed to write to localStorage");
        }
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = &self.storage else {
            warn!(key, "localStorage is unavailable, nothing to remove");
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            warn!(key, ?err, "Failed to remove from localStorage");
        }
    }
}

/// Navigates by assigning `window.location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, target: &str) -> Result<()> {
        let window = web_sys::window().ok_or(SessionError::BrowserUnavailable("window"))?;
        window
            .location()
            .set_href(target)
            .map_err(|err| SessionError::Navigation(format!("{err:?}")))
    }
}

impl AdminSession<BrowserStorage> {
    /// Session over the page's `localStorage`
    pub fn browser(config: AdminConfig) -> Self {
        Self::new(config, BrowserStorage::local())
    }
}

fn page_session() -> AdminSession<BrowserStorage> {
    AdminSession::browser(AdminConfig::default())
}

fn to_js_error(err: SessionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    crate::logging::init_tracing("info");
}

/// `{"Content-Type": ..., "Authorization": ...}` for `fetch`
#[wasm_bindgen(js_name = headers)]
pub fn js_headers() -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&page_session().headers()).map_err(JsValue::from)
}

/// Leave for the login page unless a token is stored
#[wasm_bindgen(js_name = guard)]
pub fn js_guard() -> std::result::Result<(), JsValue> {
    page_session()
        .guard()
        .follow(&BrowserNavigator)
        .map_err(to_js_error)
}

/// Drop the token and leave for the login page
#[wasm_bindgen(js_name = logout)]
pub fn js_logout() -> std::result::Result<(), JsValue> {
    page_session()
        .logout()
        .follow(&BrowserNavigator)
        .map_err(to_js_error)
}
