use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = "github-repos-dashboard";

pub struct GitHubRestResult {
    pub body: String,
    pub status: StatusCode,
}

/// Sends one `GET {api_base}/users/{username}/repos`.
///
/// Status and body come back untouched; only the first page the API returns
/// is read.
pub async fn fetch_user_repos(
    client: &Client,
    api_base: &Url,
    token: &str,
    username: &str,
) -> Result<GitHubRestResult, FetchUserReposError> {
    let url = user_repos_url(api_base, username)?;

    let response = client
        .get(url)
        .header("Authorization", format!("Bearer {token}"))
        .header("Accept", "application/vnd.github+json")
        .header("User-Agent", USER_AGENT)
        .send()
        .await
        .map_err(|source| FetchUserReposError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchUserReposError::ResponseRead { source })?;

    Ok(GitHubRestResult { body, status })
}

/// Appends `users/{username}/repos` to the base, keeping any path prefix
/// (GitHub Enterprise serves the API under `/api/v3`).
pub fn user_repos_url(api_base: &Url, username: &str) -> Result<Url, FetchUserReposError> {
    let mut url = api_base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchUserReposError::InvalidUrl {
            base: api_base.to_string(),
        })?
        .pop_if_empty()
        .extend(["users", username, "repos"]);

    Ok(url)
}

#[derive(Debug, Error)]
pub enum FetchUserReposError {
    #[error("InvalidUrl: cannot append a path to {base}")]
    InvalidUrl {
        base: String,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
