use std::env;

use robot_api::Account;

pub const ENV_USER: &str = "HETZNER_USER";
pub const ENV_PASSWORD: &str = "HETZNER_PASSWORD";
pub const ENV_ROBOT_URL: &str = "HETZNER_ROBOT_URL";
pub const ENV_DEBUG: &str = "DEBUG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HETZNER_USER and HETZNER_PASSWORD must be set in env")]
    MissingCredentials,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub account: Account,
    pub robot_url: String,
    pub debug: bool,
}

impl AppConfig {
    /// Load from the process environment; `main` has already merged `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let (Some(user), Some(password)) = (non_empty(ENV_USER), non_empty(ENV_PASSWORD)) else {
            return Err(ConfigError::MissingCredentials);
        };

        Ok(Self {
            account: Account::new(user, password),
            robot_url: non_empty(ENV_ROBOT_URL).unwrap_or_else(|| robot_api::BASE_URL.into()),
            debug: debug_enabled(&lookup),
        })
    }
}

/// `DEBUG=true` turns on debug logging, regardless of whether credentials load.
pub fn debug_enabled<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_DEBUG).as_deref() == Some("true")
}
