#![allow(dead_code)]

use std::collections::HashMap;

use projects_dashboard::{
    config::{Config, API_URL_VAR, TOKEN_VAR, USER_VAR},
    domain::repos::GitHubRepos,
};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const USERNAME: &str = "octocat";
pub const TOKEN: &str = "test-token";
pub const REPOS_PATH: &str = "/users/octocat/repos";

pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

pub fn github_for(mock_server: &MockServer) -> GitHubRepos {
    github_at(&mock_server.uri())
}

pub fn github_at(api_base: &str) -> GitHubRepos {
    let vars: HashMap<&str, String> = HashMap::from([
        (USER_VAR, USERNAME.to_string()),
        (TOKEN_VAR, TOKEN.to_string()),
        (API_URL_VAR, api_base.to_string()),
    ]);

    let config = Config::from_lookup(|key: &str| vars.get(key).cloned()).unwrap();
    GitHubRepos::new(config)
}

pub fn repo_json(name: &str, private: bool) -> Value {
    json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("{USERNAME}/{name}"),
        "private": private,
        "owner": { "login": USERNAME },
        "html_url": format!("https://github.com/{USERNAME}/{name}"),
        "description": format!("The {name} repository"),
        "pushed_at": "2023-05-01T12:00:00Z",
        "created_at": "2021-01-26T19:01:12Z",
        "stargazers_count": 80,
        "forks_count": 9,
        "language": "Rust"
    })
}
