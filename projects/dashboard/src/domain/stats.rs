use interfaces_github_repos::models::RepositorySummary;

/// Aggregate counts over one fetched list. Derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub public: usize,
    pub private: usize,
}

impl Stats {
    pub fn from_repositories(repositories: &[RepositorySummary]) -> Self {
        let total = repositories.len();
        let public = repositories.iter().filter(|repo| !repo.private).count();

        Self {
            total,
            public,
            private: total - public,
        }
    }
}
