// SPDX-License-Identifier: Apache-2.0

//! Client behavior against a mock GitHub API: payload shape, header set,
//! pagination, and error mapping for both REST and GraphQL calls.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use issueboard_core::IssueboardError;
use issueboard_core::github::GitHubClient;

fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::with_base_url(SecretString::from("ghp_test".to_string()), &server.uri())
        .expect("client should build")
}

#[tokio::test]
async fn create_issue_sends_payload_and_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/owner/repo/issues"))
        .and(header("Authorization", "Bearer ghp_test"))
        .and(header("Accept", "application/vnd.github+json"))
        .and(header("X-GitHub-Api-Version", "2022-11-28"))
        .and(body_json(json!({
            "title": "Test issue",
            "body": "Issue body",
            "labels": ["bug", "urgent"],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 42,
            "html_url": "https://github.com/owner/repo/issues/42",
            "node_id": "I_abc123",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let issue = client
        .create_issue(
            "owner",
            "repo",
            "Test issue",
            "Issue body",
            &["bug".to_string(), "urgent".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(issue.number, 42);
    assert_eq!(issue.html_url, "https://github.com/owner/repo/issues/42");
    assert_eq!(issue.node_id, "I_abc123");
}

#[tokio::test]
async fn create_issue_omits_labels_field_when_empty() {
    let server = MockServer::start().await;

    // Exact body match: a request carrying any `labels` key will not match
    // and the test fails on the expect(1) count.
    Mock::given(method("POST"))
        .and(path("/repos/o/r/issues"))
        .and(body_json(json!({ "title": "T", "body": "B" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 1,
            "html_url": "https://github.com/o/r/issues/1",
            "node_id": "I_1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.create_issue("o", "r", "T", "B", &[]).await.unwrap();
}

#[tokio::test]
async fn create_issue_maps_http_error_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/o/r/issues"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"message": "Validation Failed"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.create_issue("o", "r", "T", "B", &[]).await.unwrap_err();

    match err {
        IssueboardError::Api {
            message,
            status,
            body,
        } => {
            assert!(message.contains("422"), "message was: {message}");
            assert_eq!(status, Some(422));
            assert_eq!(body.as_deref(), Some(r#"{"message": "Validation Failed"}"#));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn find_project_scans_pages_until_title_matches() {
    let server = MockServer::start().await;

    // Page 1: no cursor, no match, more pages available.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "cursor": null } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "organization": {
                    "projectsV2": {
                        "nodes": [{ "id": "PVT_aaa", "title": "Other Board" }],
                        "pageInfo": { "hasNextPage": true, "endCursor": "CUR1" },
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Page 2: forwarded cursor, contains the match.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "cursor": "CUR1" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "organization": {
                    "projectsV2": {
                        "nodes": [{ "id": "PVT_bbb", "title": "My Board" }],
                        "pageInfo": { "hasNextPage": false, "endCursor": null },
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client
        .find_project_by_title("myorg", "My Board")
        .await
        .unwrap();

    assert_eq!(id, "PVT_bbb");
}

#[tokio::test]
async fn find_project_not_found_names_title_and_owner() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "organization": {
                    "projectsV2": {
                        "nodes": [{ "id": "PVT_aaa", "title": "Other Board" }],
                        "pageInfo": { "hasNextPage": false, "endCursor": null },
                    }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .find_project_by_title("myorg", "Nope")
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Nope"), "message was: {message}");
    assert!(message.contains("myorg"), "message was: {message}");
}

#[tokio::test]
async fn graphql_errors_array_fails_despite_200_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Could not resolve to a ProjectV2" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.add_to_project("bad", "I_x").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("GraphQL error"), "message was: {message}");
    assert!(
        message.contains("Could not resolve to a ProjectV2"),
        "message was: {message}"
    );
}

#[tokio::test]
async fn graphql_error_messages_are_joined() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "first" }, { "message": "second" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.add_to_project("p", "i").await.unwrap_err();

    assert!(
        err.to_string().contains("first; second"),
        "message was: {err}"
    );
}

#[tokio::test]
async fn add_to_project_sends_mutation_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "projectId": "PVT_abc", "contentId": "I_xyz" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "addProjectV2ItemById": { "item": { "id": "PVTI_123" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let item = client.add_to_project("PVT_abc", "I_xyz").await.unwrap();

    assert_eq!(item.id, "PVTI_123");
}

#[tokio::test]
async fn add_to_project_maps_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.add_to_project("p", "i").await.unwrap_err();

    match err {
        IssueboardError::Api {
            message,
            status,
            body,
        } => {
            assert!(message.contains("401"), "message was: {message}");
            assert_eq!(status, Some(401));
            assert_eq!(body.as_deref(), Some("Bad credentials"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
