//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend host/port differs per deployment while the API base path and
//! the browser storage keys stay fixed. `ClientConfig` is provided through
//! Leptos context so services never read globals.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `EVENT_BOARD_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// `localStorage` key holding the logged-in user's id.
pub const USER_ID_KEY: &str = "user_id";

/// `localStorage` key holding the logged-in user's name.
pub const USERNAME_KEY: &str = "username";

/// How long transient flash messages stay visible.
pub const FLASH_DURATION_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute API root without a trailing slash, e.g. `http://host:5000/api`.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build a config from an explicit base URL, trimming trailing slashes.
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }

    /// Read `EVENT_BOARD_API_URL` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("EVENT_BOARD_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Join an API path (starting with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
