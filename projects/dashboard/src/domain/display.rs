use interfaces_github_repos::models::RepositorySummary;

use super::{
    format::{format_date, truncate_description},
    stats::Stats,
};

/// Everything one repository card shows, already decided: views only print
/// these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCard {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub pushed: String,
    pub created: String,
    pub stars: u64,
    pub forks: u64,
    pub visibility_icon: &'static str,
    pub visibility_label: &'static str,
    pub language: Option<String>,
    pub html_url: String,
}

impl RepositoryCard {
    pub fn from_summary(repo: &RepositorySummary) -> Self {
        let (visibility_icon, visibility_label) = if repo.private {
            ("🔒", "Private")
        } else {
            ("🌍", "Public")
        };

        Self {
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
            description: repo
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(truncate_description),
            pushed: format_date(repo.pushed_at.as_deref()),
            created: format_date(repo.created_at.as_deref()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            visibility_icon,
            visibility_label,
            language: repo.language.clone().filter(|l| !l.is_empty()),
            html_url: repo.html_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub username: String,
    pub stats: Stats,
    pub cards: Vec<RepositoryCard>,
}

impl DashboardView {
    pub fn build(username: &str, repositories: &[RepositorySummary]) -> Self {
        Self {
            username: username.to_string(),
            stats: Stats::from_repositories(repositories),
            cards: repositories.iter().map(RepositoryCard::from_summary).collect(),
        }
    }
}
