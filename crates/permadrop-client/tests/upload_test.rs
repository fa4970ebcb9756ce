mod helpers;

use helpers::{body_contains, test_uploader};
use permadrop_client::UploadError;
use permadrop_core::models::UploadRequest;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn upload_returns_id_and_gateway_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/uploads"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "tx-123" })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let uploader = test_uploader(&server, &dir).await;

    let mut checkpoints = Vec::new();
    let result = uploader
        .upload(UploadRequest::new("notes.md", b"# notes".to_vec()), |p| {
            checkpoints.push(p)
        })
        .await
        .unwrap();

    assert_eq!(result.id, "tx-123");
    assert_eq!(result.url, "https://arweave.net/tx-123");
    assert_eq!(checkpoints, vec![5, 10, 20, 40, 100]);
}

#[tokio::test]
async fn upload_sends_the_standard_tags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/uploads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "tx-1" })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let uploader = test_uploader(&server, &dir).await;
    uploader
        .upload(UploadRequest::new("notes.md", b"# notes".to_vec()), |_| {})
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body = &requests[0].body;
    assert!(body_contains(body, "# notes"));
    for needle in [
        "Content-Type",
        "text/markdown",
        "App-Name",
        "permadrop",
        "App-Version",
        "Unix-Time",
        "Filename",
        "notes.md",
    ] {
        assert!(body_contains(body, needle), "missing {:?} in body", needle);
    }
}

#[tokio::test]
async fn declared_content_type_rides_into_the_tags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/uploads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "tx-1" })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let uploader = test_uploader(&server, &dir).await;
    uploader
        .upload(
            UploadRequest::new("blob", vec![1, 2, 3]).with_content_type("image/png"),
            |_| {},
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(body_contains(&requests[0].body, "image/png"));
}

#[tokio::test]
async fn backend_failure_surfaces_the_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/uploads"))
        .respond_with(ResponseTemplate::new(500).set_body_string("bundle queue full"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let uploader = test_uploader(&server, &dir).await;

    let err = uploader
        .upload(UploadRequest::new("notes.md", b"# notes".to_vec()), |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Failed(_)));
    let message = err.to_string();
    assert!(message.contains("500"), "message was {:?}", message);
    assert!(message.contains("bundle queue full"));
}

#[tokio::test]
async fn empty_batch_fails_without_touching_the_network() {
    let server = MockServer::start().await;

    let dir = tempfile::tempdir().unwrap();
    let uploader = test_uploader(&server, &dir).await;

    let err = uploader.upload_batch(Vec::new(), |_| {}).await.unwrap_err();
    assert!(matches!(err, UploadError::EmptyBatch));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn batch_uploads_every_file_plus_a_manifest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/uploads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "tx-1" })))
        .expect(3)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let uploader = test_uploader(&server, &dir).await;

    let mut checkpoints = Vec::new();
    let result = uploader
        .upload_batch(
            vec![
                UploadRequest::new("a.md", b"alpha".to_vec()),
                UploadRequest::new("b.json", b"{}".to_vec()),
            ],
            |p| checkpoints.push(p),
        )
        .await
        .unwrap();

    assert_eq!(result.url, "https://arweave.net/tx-1");
    assert_eq!(checkpoints, vec![0, 33, 66, 100]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3, "two files and one manifest");

    // The trailing request carries the manifest document.
    let manifest_body = &requests[2].body;
    assert!(body_contains(manifest_body, "arweave/paths"));
    assert!(body_contains(manifest_body, "\"a.md\""));
    assert!(body_contains(manifest_body, "\"b.json\""));
    assert!(body_contains(
        manifest_body,
        "application/x.arweave-manifest+json"
    ));
}

#[tokio::test]
async fn batch_aborts_on_the_first_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/uploads"))
        .respond_with(ResponseTemplate::new(500).set_body_string("no capacity"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let uploader = test_uploader(&server, &dir).await;

    let err = uploader
        .upload_batch(
            vec![
                UploadRequest::new("a.md", b"alpha".to_vec()),
                UploadRequest::new("b.json", b"{}".to_vec()),
            ],
            |_| {},
        )
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Failed(_)));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn upload_path_reads_the_file_inside_the_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/uploads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "tx-7" })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("hello.txt");
    std::fs::write(&file, "hello world").unwrap();

    let uploader = test_uploader(&server, &dir).await;
    let mut checkpoints = Vec::new();
    let result = uploader
        .upload_path(&file, |p| checkpoints.push(p))
        .await
        .unwrap();

    assert_eq!(result.id, "tx-7");
    assert_eq!(checkpoints, vec![5, 10, 20, 40, 100]);

    let requests = server.received_requests().await.unwrap();
    assert!(body_contains(&requests[0].body, "hello world"));
    assert!(body_contains(&requests[0].body, "text/plain"));
}
