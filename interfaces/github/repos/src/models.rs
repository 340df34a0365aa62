use serde::Deserialize;

/// One entry of the `/users/{username}/repos` array, reduced to the fields
/// the dashboard shows. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
}

/// Error body GitHub sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let repo: RepositorySummary = serde_json::from_value(json!({
            "name": "hello-world",
            "full_name": "octocat/hello-world",
            "pushed_at": null,
            "owner": { "login": "octocat" }
        }))
        .unwrap();

        assert_eq!(repo.pushed_at, None);
        assert_eq!(repo.created_at, None);
        assert_eq!(repo.stargazers_count, 0);
        assert!(!repo.private);
        assert_eq!(repo.html_url, "");
    }

    #[test]
    fn name_is_required() {
        let result = serde_json::from_value::<RepositorySummary>(json!({
            "full_name": "octocat/hello-world"
        }));
        assert!(result.is_err());
    }
}
