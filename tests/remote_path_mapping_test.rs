mod common;

use anyhow::Result;
use common::{radarr, readarr, API_KEY, NOT_FOUND};
use httpmock::prelude::*;
use serde_json::json;
use starr::RemotePathMapping;

const REMOTE_PATH_MAPPING: &str = r#"{
    "host": "transmission",
    "remotePath": "/remote/",
    "localPath": "/local/",
    "id": 2
}"#;

fn expected_mapping() -> RemotePathMapping {
    RemotePathMapping {
        id: 2,
        host: "transmission".to_string(),
        remote_path: "/remote/".to_string(),
        local_path: "/local/".to_string(),
    }
}

fn new_mapping() -> RemotePathMapping {
    RemotePathMapping {
        id: 0,
        ..expected_mapping()
    }
}

#[tokio::test]
async fn test_get_remote_path_mappings() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/remotePathMapping")
                .header("x-api-key", API_KEY);
            then.status(200)
                .header("content-type", "application/json")
                .body(format!("[{}]", REMOTE_PATH_MAPPING));
        })
        .await;

    let output = readarr(&server).get_remote_path_mappings().await?;

    mock.assert_async().await;
    assert_eq!(output, vec![expected_mapping()]);
    Ok(())
}

#[tokio::test]
async fn test_get_remote_path_mappings_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/remotePathMapping");
            then.status(404).body(NOT_FOUND);
        })
        .await;

    let err = readarr(&server).get_remote_path_mappings().await.unwrap_err();

    assert!(err.is_invalid_status());
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_get_remote_path_mapping() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/remotePathMapping/1");
            then.status(200).body(REMOTE_PATH_MAPPING);
        })
        .await;

    let output = readarr(&server).get_remote_path_mapping(1).await?;

    mock.assert_async().await;
    assert_eq!(output, expected_mapping());

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/remotePathMapping/1");
            then.status(404).body(NOT_FOUND);
        })
        .await;
    let err = readarr(&server).get_remote_path_mapping(1).await.unwrap_err();
    assert!(err.is_invalid_status());
    Ok(())
}

#[tokio::test]
async fn test_add_remote_path_mapping() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/remotePathMapping")
                .header("content-type", "application/json")
                .json_body(json!({
                    "host": "transmission",
                    "remotePath": "/remote/",
                    "localPath": "/local/"
                }));
            then.status(201).body(REMOTE_PATH_MAPPING);
        })
        .await;

    let output = readarr(&server).add_remote_path_mapping(&new_mapping()).await?;

    mock.assert_async().await;
    assert_eq!(output, expected_mapping());
    Ok(())
}

#[tokio::test]
async fn test_add_remote_path_mapping_not_found() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/remotePathMapping");
            then.status(404).body(NOT_FOUND);
        })
        .await;

    let result = readarr(&server).add_remote_path_mapping(&new_mapping()).await;

    mock.assert_async().await;
    assert!(result.unwrap_err().is_invalid_status());
}

#[tokio::test]
async fn test_update_remote_path_mapping() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/v1/remotePathMapping/2")
                .json_body(json!({
                    "id": 2,
                    "host": "transmission",
                    "remotePath": "/remote/",
                    "localPath": "/local/"
                }));
            then.status(201).body(REMOTE_PATH_MAPPING);
        })
        .await;

    let output = readarr(&server)
        .update_remote_path_mapping(&expected_mapping())
        .await?;

    mock.assert_async().await;
    assert_eq!(output, expected_mapping());
    Ok(())
}

#[tokio::test]
async fn test_delete_remote_path_mapping() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v1/remotePathMapping/2");
            then.status(200).body("{}");
        })
        .await;

    readarr(&server).delete_remote_path_mapping(2).await?;
    mock.assert_async().await;

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v1/remotePathMapping/2");
            then.status(404).body(NOT_FOUND);
        })
        .await;
    let err = readarr(&server).delete_remote_path_mapping(2).await.unwrap_err();
    assert!(err.is_invalid_status());
    Ok(())
}

#[tokio::test]
async fn test_radarr_uses_its_own_api_version() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v3/remotePathMapping");
            then.status(200).body(format!("[{}]", REMOTE_PATH_MAPPING));
        })
        .await;

    let output = radarr(&server).get_remote_path_mappings().await?;

    mock.assert_async().await;
    assert_eq!(output.len(), 1);
    assert_eq!(output[0].host, "transmission");
    Ok(())
}

#[tokio::test]
async fn test_update_remote_path_mapping_not_found() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/v1/remotePathMapping/2")
                .json_body(json!({
                    "id": 2,
                    "host": "transmission",
                    "remotePath": "/remote/",
                    "localPath": "/local/"
                }));
            then.status(404).body(NOT_FOUND);
        })
        .await;

    let err = readarr(&server)
        .update_remote_path_mapping(&expected_mapping())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_invalid_status());
    assert!(err.to_string().starts_with("api.PUT(v1/remotePathMapping/2)"));
}

#[tokio::test]
async fn test_null_list_body_is_empty() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/remotePathMapping");
            then.status(200).body("null");
        })
        .await;

    let output = readarr(&server).get_remote_path_mappings().await?;

    mock.assert_async().await;
    assert!(output.is_empty());
    Ok(())
}
