//! Host configuration parsed from environment variables.
//!
//! `main` loads an optional `.env` file first, so every value here can come
//! from either the process environment or that file.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IDENTITY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SIGNOUT_REDIRECT_URL: &str = "/";
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "session_token";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream "who am I" URL. `None` disables identity resolution.
    pub identity_upstream_url: Option<String>,
    pub identity_timeout_secs: u64,
    pub signout_redirect_url: String,
    pub session_cookie_name: String,
    pub cookie_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            identity_upstream_url: None,
            identity_timeout_secs: DEFAULT_IDENTITY_TIMEOUT_SECS,
            signout_redirect_url: DEFAULT_SIGNOUT_REDIRECT_URL.to_owned(),
            session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_owned(),
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IDENTITY_UPSTREAM_URL`: unset disables identity (every `/api/auth/me` is 401)
    /// - `IDENTITY_TIMEOUT_SECS`: default 10
    /// - `SIGNOUT_REDIRECT_URL`: default `/`
    /// - `SESSION_COOKIE_NAME`: default `session_token`
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => defaults.port,
        };
        let identity_timeout_secs = match non_empty("IDENTITY_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid { key: "IDENTITY_TIMEOUT_SECS", value: raw })?,
            None => defaults.identity_timeout_secs,
        };
        let cookie_secure = match non_empty("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => defaults.cookie_secure,
        };

        Ok(Self {
            port,
            identity_upstream_url: non_empty("IDENTITY_UPSTREAM_URL"),
            identity_timeout_secs,
            signout_redirect_url: non_empty("SIGNOUT_REDIRECT_URL").unwrap_or(defaults.signout_redirect_url),
            session_cookie_name: non_empty("SESSION_COOKIE_NAME").unwrap_or(defaults.session_cookie_name),
            cookie_secure,
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
