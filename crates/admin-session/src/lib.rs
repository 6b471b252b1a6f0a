//! Session helpers for the WeCare admin panel
//!
//! Three operations back every admin page:
//!
//! - [`AdminSession::headers`] builds `Content-Type` and bearer `Authorization`
//!   headers from the stored token
//! - [`AdminSession::guard`] sends visitors without a token to the login page
//! - [`AdminSession::logout`] clears the token and returns to the login page
//!
//! Redirects come back as a [`Navigation`] value. A [`Navigator`] carries it
//! out; in the browser that is `BrowserNavigator`, which sets
//! `window.location.href`.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod config;
pub mod error;
pub mod guard;
pub mod headers;
pub mod logging;
pub mod navigation;
pub mod session;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserNavigator, BrowserStorage};
pub use config::AdminConfig;
pub use error::{Result, SessionError};
pub use guard::{SessionGuard, SessionTerminator};
pub use headers::{AuthHeaderBuilder, AuthHeaders};
pub use navigation::{Navigation, Navigator, RecordingNavigator};
pub use session::AdminSession;
pub use storage::{CredentialStore, MemoryStore};
