use interfaces_github_repos::index::{fetch_user_repos, FetchUserReposError};
use reqwest::{Client, StatusCode};
use serde_json::json;
use url::Url;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn sends_authenticated_get_and_returns_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "hello-world", "full_name": "octocat/hello-world" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = Url::parse(&mock_server.uri()).unwrap();
    let result = fetch_user_repos(&Client::new(), &base, "test-token", "octocat")
        .await
        .unwrap();

    assert_eq!(result.status, StatusCode::OK);
    assert!(result.body.contains("octocat/hello-world"));
}

#[tokio::test]
async fn non_success_status_is_not_an_error_at_this_layer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/ghost/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&mock_server)
        .await;

    let base = Url::parse(&mock_server.uri()).unwrap();
    let result = fetch_user_repos(&Client::new(), &base, "test-token", "ghost")
        .await
        .unwrap();

    assert_eq!(result.status, StatusCode::NOT_FOUND);
    assert!(result.body.contains("Not Found"));
}

#[tokio::test]
async fn unreachable_host_is_a_send_error() {
    let base = Url::parse("http://127.0.0.1:1").unwrap();

    let result = fetch_user_repos(&Client::new(), &base, "test-token", "octocat").await;

    assert!(matches!(result, Err(FetchUserReposError::RequestSend { .. })));
}
