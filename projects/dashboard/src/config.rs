use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use interfaces_github_repos::index::DEFAULT_API_BASE;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const USER_VAR: &str = "GITHUB_USER";
pub const TOKEN_VAR: &str = "GITHUB_PAT";
pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const BIND_ADDR_VAR: &str = "DASHBOARD_ADDR";
pub const ENV_FILE_VAR: &str = "DASHBOARD_ENV_FILE";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Process-wide settings, read once at startup and handed to the fetcher
/// and the router.
#[derive(Debug)]
pub struct Config {
    pub username: String,
    pub token: SecretString,
    pub api_base: Url,
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Token not found. Make sure GITHUB_PAT is set in .env or the environment.")]
    MissingToken,

    #[error("Username not found. Make sure GITHUB_USER is set in .env or the environment.")]
    MissingUsername,

    #[error("InvalidApiUrl: {value}: {source}")]
    InvalidApiUrl {
        value: String,
        source: url::ParseError,
    },

    #[error("UnsupportedApiUrl: {value} is not an http(s) URL")]
    UnsupportedApiUrl {
        value: String,
    },

    #[error("InvalidBindAddr: {value}: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. The token is checked first so
    /// a missing credential is reported before anything else.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = non_empty(lookup(TOKEN_VAR)).ok_or(ConfigError::MissingToken)?;
        let username = non_empty(lookup(USER_VAR)).ok_or(ConfigError::MissingUsername)?;

        let api_base_value =
            non_empty(lookup(API_URL_VAR)).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&api_base_value).map_err(|source| ConfigError::InvalidApiUrl {
            value: api_base_value.clone(),
            source,
        })?;
        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedApiUrl {
                value: api_base_value,
            });
        }

        let bind_addr_value =
            non_empty(lookup(BIND_ADDR_VAR)).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr_value.clone(),
                source,
            })?;

        Ok(Self {
            username,
            token: SecretString::from(token),
            api_base,
            bind_addr,
        })
    }

    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Loads a local `.env` file, honouring `DASHBOARD_ENV_FILE`.
pub fn load_dotenv() -> Option<PathBuf> {
    let env_file = std::env::var_os(ENV_FILE_VAR);
    load_dotenv_from(env_file.as_deref().map(Path::new))
}

/// Loads `path`, or searches for `.env` from the working directory upwards
/// when no path is given. Variables already set in the environment are not
/// overridden. A missing file is not an error.
///
/// Returns the file that was loaded, if any.
pub fn load_dotenv_from(path: Option<&Path>) -> Option<PathBuf> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(err) if err.not_found() => {
            debug!("No .env file found, using process environment");
            None
        }
        Err(err) => {
            warn!("Ignoring unreadable .env file: {err}");
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
