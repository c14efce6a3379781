//! Integration tests for the statistics service client using wiremock

use stackstats::stats::{GatewayError, StatsClient, StatsGateway};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_body() -> serde_json::Value {
    serde_json::json!({
        "data": [
            {"id": "user1", "text": "User One"},
            {"id": "user2", "text": "User Two"},
            {"id": "user3", "text": "User Three"}
        ]
    })
}

fn contribution_body() -> serde_json::Value {
    serde_json::json!({
        "contribution": {
            "commit_count": 5,
            "completed_blueprint_count": 1,
            "drafted_blueprint_count": 0,
            "email_count": 3,
            "filed_bug_count": 2,
            "loc": 100,
            "patch_set_count": 7,
            "resolved_bug_count": 1,
            "marks": {"-2": 0, "-1": 1, "1": 9, "2": 4, "A": 2}
        }
    })
}

#[tokio::test]
async fn test_registered_users_filters_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(registry_body()))
        .mount(&server)
        .await;

    let client = StatsClient::new(&server.uri()).unwrap();
    let candidates = vec!["user1".to_string(), "ghost".to_string(), "user3".to_string()];
    let registered = client.registered_users(&candidates).await.unwrap();

    assert!(registered.contains("user1"));
    assert!(registered.contains("user3"));
    assert!(!registered.contains("ghost"));
    assert_eq!(registered.len(), 2);
}

#[tokio::test]
async fn test_registered_users_empty_registry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;

    let client = StatsClient::new(&server.uri()).unwrap();
    let registered = client.registered_users(&["user1".to_string()]).await.unwrap();
    assert!(registered.is_empty());
}

#[tokio::test]
async fn test_registered_users_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = StatsClient::new(&server.uri()).unwrap();
    let err = client.registered_users(&["user1".to_string()]).await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
}

#[tokio::test]
async fn test_contribution_decodes_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/contribution"))
        .and(query_param("user_id", "user1"))
        .and(query_param("release", "icehouse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contribution_body()))
        .mount(&server)
        .await;

    let client = StatsClient::new(&server.uri()).unwrap();
    let record = client.contribution("user1", "icehouse").await.unwrap();

    assert_eq!(record.commit_count, 5);
    assert_eq!(record.loc, 100);
    assert_eq!(record.patch_set_count, 7);
    assert_eq!(record.mark("1"), 9);
    assert_eq!(record.mark("A"), 2);
}

#[tokio::test]
async fn test_contribution_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/contribution"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = StatsClient::new(&server.uri()).unwrap();
    let err = client.contribution("user1", "nosuchrelease").await.unwrap_err();

    match err {
        GatewayError::NotFound { user, release, status } => {
            assert_eq!(user, "user1");
            assert_eq!(release, "nosuchrelease");
            assert_eq!(status, 404);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_contribution_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/contribution"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = StatsClient::new(&server.uri()).unwrap();
    assert!(client.contribution("user1", "icehouse").await.is_err());
}
