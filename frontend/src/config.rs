//! Build-time configuration for the frontend.
//!
//! The API host is baked in when the wasm bundle is built (`API_HOST=... trunk
//! build`) and turned into an [`ApiConfig`] value once, in `main`. Components
//! receive that value through their properties and never read the environment
//! themselves.

use common::requests::{CONTACTS_PATH, PHOTO_UPLOAD_PATH};
use log::{info, LevelFilter, ParseLevelError};

const DEFAULT_API_HOST: &str = "localhost:8080";
const DEFAULT_UPLOAD_OWNER_ID: u32 = 1;

/// Where the contacts API lives and who owns uploaded photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and authority, without a trailing slash (`http://host:port`).
    pub base_url: String,
    /// Placeholder owner sent with every photo upload. There is no
    /// authenticated user yet, so this is always the same account.
    pub upload_owner_id: u32,
}

impl ApiConfig {
    /// Builds a config for `host`. A bare `host[:port]` is served over plain
    /// http; a value that already carries a scheme is used as given.
    pub fn new(host: &str) -> Self {
        let host = host.trim().trim_end_matches('/');
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };

        Self {
            base_url,
            upload_owner_id: DEFAULT_UPLOAD_OWNER_ID,
        }
    }

    /// Reads `API_HOST` as captured at compile time.
    pub fn from_env() -> Self {
        match option_env!("API_HOST").filter(|h| !h.trim().is_empty()) {
            Some(host) => Self::new(host),
            None => {
                info!("API_HOST not set, using default: {DEFAULT_API_HOST}");
                Self::new(DEFAULT_API_HOST)
            }
        }
    }

    pub fn contacts_url(&self) -> String {
        format!("{}{}", self.base_url, CONTACTS_PATH)
    }

    pub fn photo_upload_url(&self) -> String {
        format!("{}{}", self.base_url, PHOTO_UPLOAD_PATH)
    }
}

/// Level used when `LOG_LEVEL` is unset or invalid.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Console log level, from the compile-time `LOG_LEVEL` variable.
///
/// Runs before any logger exists, so an invalid value is returned to the
/// caller instead of being logged here.
pub fn log_level() -> Result<LevelFilter, ParseLevelError> {
    parse_log_level(option_env!("LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> Result<LevelFilter, ParseLevelError> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(raw) => raw.parse(),
        None => Ok(default_log_level()),
    }
}
