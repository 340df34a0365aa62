use std::io::{self, Write};

use interfaces_github_repos::models::RepositorySummary;
use thiserror::Error;
use tracing::info;

use crate::domain::{
    format::DATE_PLACEHOLDER,
    repos::{fetch_repositories, FetchRepositoriesError, GitHubRepos},
};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("FetchRepositories: {source}")]
    FetchRepositories {
        #[from]
        source: FetchRepositoriesError,
    },

    #[error("WriteOutput: {source}")]
    WriteOutput {
        #[from]
        source: io::Error,
    },
}

/// One listing line. The push timestamp is printed raw.
pub fn format_line(repo: &RepositorySummary) -> String {
    format!(
        "📁 {} – Last push: {} - Committer: {}",
        repo.name,
        repo.pushed_at.as_deref().unwrap_or(DATE_PLACEHOLDER),
        repo.full_name
    )
}

pub fn write_listing<W: Write>(out: &mut W, repositories: &[RepositorySummary]) -> io::Result<usize> {
    for repo in repositories {
        writeln!(out, "{}", format_line(repo))?;
    }
    out.flush()?;

    Ok(repositories.len())
}

/// Fetches once and prints the listing to `out`. Fetch errors go to `err`
/// and are returned for the caller to exit on.
pub async fn run<W: Write, E: Write>(
    github: &GitHubRepos,
    out: &mut W,
    err: &mut E,
) -> Result<usize, ConsoleError> {
    let repositories = match fetch_repositories(github).await {
        Ok(repositories) => repositories,
        Err(source) => {
            writeln!(err, "❌ {source}")?;
            if let FetchRepositoriesError::UnexpectedFormat { body, .. } = &source {
                writeln!(err, "{body}")?;
            }
            return Err(ConsoleError::FetchRepositories { source });
        }
    };

    let printed = write_listing(out, &repositories)?;
    info!(username = %github.config().username, printed, "Listed repositories");

    Ok(printed)
}
