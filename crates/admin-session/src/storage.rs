//! Credential storage
//!
//! The session helpers only ever read and delete one entry of a browser-style
//! key/value store. [`CredentialStore`] is that surface; [`MemoryStore`] backs
//! it natively and `BrowserStorage` backs it with `window.localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;

/// Key/value storage holding the credential token
///
/// Methods take `&self` because the browser store they model is shared and
/// mutated through a handle. Access is assumed to always succeed.
pub trait CredentialStore {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str);

    /// Delete the value stored under `key`, if any
    fn remove_item(&self, key: &str);
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value);
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key);
    }
}

/// In-memory store for native use and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token` under `key`
    pub fn with_item(key: &str, token: &str) -> Self {
        let store = Self::new();
        store.set_item(key, token);
        store
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl CredentialStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
