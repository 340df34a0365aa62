use projects_dashboard::domain::repos::{fetch_repositories, FetchRepositoriesError};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

mod common;
use common::{github_for, repo_json, REPOS_PATH, TOKEN};

#[tokio::test]
async fn returns_repositories_in_response_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPOS_PATH))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("zeta", false),
            repo_json("alpha", true),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let repos = fetch_repositories(&github_for(&mock_server)).await.unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "zeta");
    assert_eq!(repos[0].full_name, "octocat/zeta");
    assert_eq!(repos[0].pushed_at.as_deref(), Some("2023-05-01T12:00:00Z"));
    assert_eq!(repos[0].stargazers_count, 80);
    assert_eq!(repos[1].name, "alpha");
    assert!(repos[1].private);
}

#[tokio::test]
async fn non_200_is_an_api_error_with_upstream_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPOS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = fetch_repositories(&github_for(&mock_server)).await.unwrap_err();

    match &err {
        FetchRepositoriesError::Api { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Bad credentials");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "API Error 401: Bad credentials");
}

#[tokio::test]
async fn non_200_without_json_body_uses_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPOS_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let err = fetch_repositories(&github_for(&mock_server)).await.unwrap_err();

    assert_eq!(err.to_string(), "API Error 503: Service Unavailable");
}

#[tokio::test]
async fn object_body_is_a_format_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPOS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "not-a-list"
        })))
        .mount(&mock_server)
        .await;

    let err = fetch_repositories(&github_for(&mock_server)).await.unwrap_err();

    assert!(err.is_format_error());
    assert!(matches!(
        err,
        FetchRepositoriesError::UnexpectedFormat { found: "object", .. }
    ));
}

#[tokio::test]
async fn each_call_hits_upstream_again() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPOS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let github = github_for(&mock_server);
    assert!(fetch_repositories(&github).await.unwrap().is_empty());
    assert!(fetch_repositories(&github).await.unwrap().is_empty());
}
