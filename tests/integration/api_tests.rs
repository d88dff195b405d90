use crate::support::*;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use nex_harvest::server::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router_for(mock_server: &MockServer) -> Router {
    create_router(AppState::new(search_service(mock_server)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Fails the test on drop if the site receives any request
async fn expect_no_requests(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_search_success_body() {
    let mock_server = MockServer::start().await;
    let links = vec![format!("{}/music/one/", mock_server.uri())];

    mount_first_page(&mock_server, "test", listing_page(&[])).await;
    mount_listing_page(&mock_server, 1, "test", listing_page(&links)).await;
    mount_detail_page(&mock_server, "/music/one/", "One").await;

    let (status, body) = get(router_for(&mock_server), "/search?q=test&page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "channel": "@tss_apis",
            "programer": "tss",
            "id_rubika": "@tss_dev",
            "total pages": 1,
            "results": [{
                "title": "One",
                "image": "https://cdn.example.com/One.jpg",
                "links": [
                    {"url": "https://dl.example.com/One-320.mp3", "quality": "320"},
                    {"url": "https://dl.example.com/One.mp3", "quality": ""}
                ]
            }]
        }])
    );
}

#[tokio::test]
async fn test_search_default_page_is_two() {
    let mock_server = MockServer::start().await;
    let links = vec![format!("{}/music/one/", mock_server.uri())];

    mount_first_page(&mock_server, "test", listing_page_with_pagination(&[], 3)).await;
    mount_listing_page(&mock_server, 2, "test", listing_page(&links)).await;
    mount_detail_page(&mock_server, "/music/one/", "One").await;

    let (status, body) = get(router_for(&mock_server), "/search?q=test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["total pages"], 3);
}

#[tokio::test]
async fn test_search_no_results_is_404() {
    let mock_server = MockServer::start().await;
    let links = vec![format!("{}/music/one/", mock_server.uri())];

    mount_first_page(&mock_server, "test", listing_page(&[])).await;
    mount_listing_page(&mock_server, 1, "test", listing_page(&links)).await;
    mount_status(&mock_server, "/music/one/", 500).await;

    let (status, body) = get(router_for(&mock_server), "/search?q=test&page=1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "No results found"}));
}

#[tokio::test]
async fn test_search_first_page_failure_is_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (status, body) = get(router_for(&mock_server), "/search?q=test&page=1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Failed to fetch search results."}));
}

#[tokio::test]
async fn test_page_out_of_range_rejected_before_fetch() {
    let mock_server = MockServer::start().await;
    expect_no_requests(&mock_server).await;

    for uri in [
        "/search?q=test&page=0",
        "/search?q=test&page=6",
        "/search?q=test&page=-3",
    ] {
        let (status, body) = get(router_for(&mock_server), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        assert!(body["detail"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn test_invalid_query_rejected_before_fetch() {
    let mock_server = MockServer::start().await;
    expect_no_requests(&mock_server).await;

    for uri in ["/search", "/search?q=", "/search?page=1", "/search?q=test&page=abc"] {
        let (status, _) = get(router_for(&mock_server), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
    }
}

#[tokio::test]
async fn test_health() {
    let mock_server = MockServer::start().await;
    expect_no_requests(&mock_server).await;

    let (status, body) = get(router_for(&mock_server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
