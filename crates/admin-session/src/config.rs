//! Admin panel configuration
//!
//! The API origin, the storage key holding the credential token and the login
//! page path. Native builds can layer these from a TOML file and
//! `WECARE_ADMIN_*` environment variables; browser builds use the defaults.

use crate::error::{Result, SessionError};
use serde::{Deserialize, Serialize};

/// API origin used during local development
pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000";

/// API origin of the hosted deployment
pub const PRODUCTION_API_BASE_URL: &str = "https://wecarehhcs.in";

/// Local storage key the login page writes the token under
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Path of the admin login page
pub const DEFAULT_LOGIN_PATH: &str = "/admin/login";

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATHS: [&str; 2] = ["admin.toml", "config/admin.toml"];

#[cfg(not(target_arch = "wasm32"))]
const ENV_PREFIX: &str = "WECARE_ADMIN";

/// Admin session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Origin every backend request targets
    pub api_base_url: String,

    /// Storage key of the credential token
    pub token_key: String,

    /// Page unauthenticated users are sent to
    pub login_path: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: LOCAL_API_BASE_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl AdminConfig {
    /// Configuration pointing at the hosted deployment
    pub fn production() -> Self {
        Self {
            api_base_url: PRODUCTION_API_BASE_URL.to_string(),
            ..Self::default()
        }
    }

    /// Set the API origin
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the storage key of the token
    #[must_use]
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// Set the login page path
    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Validate the API origin and normalize both the origin and the login path
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidBaseUrl`] if `api_base_url` does not parse
    pub fn normalized(mut self) -> Result<Self> {
        if let Err(source) = url::Url::parse(&self.api_base_url) {
            return Err(SessionError::InvalidBaseUrl {
                url: self.api_base_url,
                source,
            });
        }

        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        if !self.login_path.starts_with('/') {
            self.login_path.insert(0, '/');
        }

        Ok(self)
    }

    /// Absolute URL of an API path on the configured origin
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Load configuration from defaults, `admin.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the origin is invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        Self::discover(std::path::Path::new("."), None)
    }

    /// Load configuration from a specific file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the origin is invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::layered(vec![config::File::from(path.as_ref())], None)
    }

    /// Layer whichever of [`CONFIG_PATHS`] exist under `dir`.
    /// `env` replaces the process environment when given.
    #[cfg(not(target_arch = "wasm32"))]
    fn discover(dir: &std::path::Path, env: Option<config::Map<String, String>>) -> Result<Self> {
        let files = CONFIG_PATHS
            .iter()
            .map(|path| dir.join(path))
            .filter(|path| path.exists())
            .map(|path| config::File::from(path).required(false))
            .collect();

        Self::layered(files, env)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn layered(
        files: Vec<config::File<config::FileSourceFile, config::FileFormat>>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        for file in files {
            builder = builder.add_source(file);
        }

        let settings = builder.add_source(environment(env)).build()?;
        let config: Self = settings.try_deserialize()?;
        config.normalized()
    }
}

/// `WECARE_ADMIN_*` variables. Values stay strings; every field is text and
/// parsing would turn a key like `007` into `7`.
#[cfg(not(target_arch = "wasm32"))]
fn environment(source: Option<config::Map<String, String>>) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .source(source)
}
