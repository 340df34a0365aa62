pub mod github;

use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::domain::repos::GitHubRepos;
use github::repos::dashboard::index::handler as github_repos_dashboard_handler;

/// The dashboard's only route is `GET /`.
pub fn router(github: GitHubRepos) -> Router {
    Router::new()
        .route("/", get(github_repos_dashboard_handler))
        .layer(Extension(github))
        .layer(TraceLayer::new_for_http())
}
