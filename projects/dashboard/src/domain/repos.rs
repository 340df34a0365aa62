use std::sync::Arc;

use interfaces_github_repos::{
    index::{fetch_user_repos, FetchUserReposError, GitHubRestResult},
    models::{ApiErrorBody, RepositorySummary},
};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

/// Config plus the HTTP client every fetch goes through. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GitHubRepos {
    http: Client,
    config: Arc<Config>,
}

impl GitHubRepos {
    pub fn new(config: Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: Config) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[derive(Debug, Error)]
pub enum FetchRepositoriesError {
    #[error("FetchUserRepos: {source}")]
    FetchUserRepos {
        #[from]
        source: FetchUserReposError,
    },

    #[error("API Error {status}: {message}")]
    Api {
        status: u16,
        message: String,
    },

    #[error("Unexpected response format: expected a JSON array, found {found}")]
    UnexpectedFormat {
        found: &'static str,
        body: String,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },
}

impl FetchRepositoriesError {
    /// True when the upstream answered 200 with a body of the wrong shape.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedFormat { .. } | Self::DeserializeResponseBody { .. }
        )
    }
}

/// Fetches the configured user's repositories, in the order the API returns
/// them. Only HTTP 200 with a JSON array counts as success. Nothing is
/// retried.
pub async fn fetch_repositories(
    github: &GitHubRepos,
) -> Result<Vec<RepositorySummary>, FetchRepositoriesError> {
    let config = github.config();

    let GitHubRestResult { body, status } = fetch_user_repos(
        &github.http,
        &config.api_base,
        config.token(),
        &config.username,
    )
    .await
    .inspect_err(|err| warn!(username = %config.username, "Upstream request failed: {err}"))?;

    if status != StatusCode::OK {
        let message = api_error_message(status, &body);
        warn!(username = %config.username, status = status.as_u16(), "Upstream returned an error: {message}");
        return Err(FetchRepositoriesError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let repositories = parse_repositories(&body).inspect_err(|err| {
        warn!(username = %config.username, "Upstream body rejected: {err}")
    })?;

    debug!(
        username = %config.username,
        count = repositories.len(),
        "Fetched repositories"
    );

    Ok(repositories)
}

/// Parses a 200 body. Anything but a JSON array of repository objects is a
/// format error.
pub fn parse_repositories(body: &str) -> Result<Vec<RepositorySummary>, FetchRepositoriesError> {
    let value: Value = serde_json::from_str(body)?;

    if !value.is_array() {
        return Err(FetchRepositoriesError::UnexpectedFormat {
            found: json_kind(&value),
            body: body.to_string(),
        });
    }

    Ok(serde_json::from_value(value)?)
}

fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "unknown error".to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
