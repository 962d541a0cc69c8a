use pagenav::{Error, RefreshClient};
use url::Url;
use wiremock::matchers::{body_string, header, method, path, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/days/?page=3&sorting=-stage", server.uri())).unwrap()
}

#[tokio::test]
async fn ping_posts_refresh_without_query_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/days/"))
        .and(header("X-CSRFToken", "token123"))
        .and(body_string("refresh"))
        .and(query_param_is_missing("page"))
        .and(query_param_is_missing("sorting"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RefreshClient::new();
    let result = client.ping(&page_url(&mock_server), "token123").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn ping_reports_rejected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/days/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("CSRF verification failed"))
        .mount(&mock_server)
        .await;

    let client = RefreshClient::new();
    let result = client.ping(&page_url(&mock_server), "stale-token").await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "CSRF verification failed");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn ping_and_forget_swallows_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/days/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    // Must not panic or surface the error.
    RefreshClient::new()
        .ping_and_forget(&page_url(&mock_server), "token123")
        .await;
}
