use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, info};

use crate::{
    domain::{
        display::DashboardView,
        repos::{fetch_repositories, FetchRepositoriesError, GitHubRepos},
    },
    views::{dashboard_page, error_page},
};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("FetchRepositories: {source}")]
    FetchRepositories {
        #[from]
        source: FetchRepositoriesError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self {
            HandlerError::FetchRepositories { source } => {
                error!("Dashboard fetch failed: {source}");
                let page = error_page(&source.to_string());
                (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
            }
        }
    }
}

/// Axum handler: GET /
///
/// Fetches upstream on every request; nothing is cached between requests.
pub async fn handler(
    Extension(github): Extension<GitHubRepos>,
) -> Result<Html<String>, HandlerError> {
    let repositories = fetch_repositories(&github).await?;

    let view = DashboardView::build(&github.config().username, &repositories);
    info!(
        username = %view.username,
        total = view.stats.total,
        public = view.stats.public,
        private = view.stats.private,
        "Rendering dashboard"
    );

    Ok(Html(dashboard_page(&view).into_string()))
}
