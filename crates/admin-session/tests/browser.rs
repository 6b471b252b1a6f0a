//! localStorage-backed store and JS exports, run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use wecare_admin_session::browser::{js_guard, js_headers};
use wecare_admin_session::{AdminConfig, AdminSession, BrowserStorage, CredentialStore};

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "wecare_admin_session_test_token";

fn session() -> AdminSession<BrowserStorage> {
    AdminSession::browser(AdminConfig::default().with_token_key(TEST_KEY))
}

fn field(object: &JsValue, name: &str) -> Option<String> {
    js_sys::Reflect::get(object, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let store = BrowserStorage::local();
    assert!(store.is_available());

    store.remove_item(TEST_KEY);
    assert!(store.get_item(TEST_KEY).is_none());

    store.set_item(TEST_KEY, "abc123");
    assert_eq!(store.get_item(TEST_KEY).as_deref(), Some("abc123"));

    store.remove_item(TEST_KEY);
    assert!(store.get_item(TEST_KEY).is_none());
}

#[wasm_bindgen_test]
fn test_unavailable_storage_reads_as_signed_out() {
    let store = BrowserStorage::new(None);
    assert!(!store.is_available());

    store.set_item(TEST_KEY, "abc123");
    assert!(store.get_item(TEST_KEY).is_none());
    store.remove_item(TEST_KEY);

    let session = AdminSession::new(AdminConfig::default().with_token_key(TEST_KEY), store);
    assert_eq!(session.headers().authorization(), "Bearer null");
    assert_eq!(session.guard().target(), Some("/admin/login"));
    assert!(session.logout().is_redirect());
}

#[wasm_bindgen_test]
fn test_browser_session_guard_and_logout() {
    let session = session();
    session.store().set_item(TEST_KEY, "abc123");

    assert!(!session.guard().is_redirect());
    assert_eq!(session.headers().authorization(), "Bearer abc123");

    // Only the intent is checked; following it would leave the test page
    let intent = session.logout();
    assert_eq!(intent.target(), Some("/admin/login"));
    assert!(session.store().get_item(TEST_KEY).is_none());
    assert!(session.guard().is_redirect());
}

#[wasm_bindgen_test]
fn test_exported_headers_object() {
    let store = BrowserStorage::local();
    let previous = store.get_item("token");
    store.set_item("token", "abc123");

    let headers = js_headers().unwrap();
    assert!(headers.is_object());
    assert_eq!(field(&headers, "Content-Type").as_deref(), Some("application/json"));
    assert_eq!(field(&headers, "Authorization").as_deref(), Some("Bearer abc123"));

    // A signed-in page stays put
    js_guard().unwrap();

    match previous {
        Some(token) => store.set_item("token", &token),
        None => store.remove_item("token"),
    }
}
