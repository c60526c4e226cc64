use std::fs;

use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_smithy_runtime::client::http::test_util::{CaptureRequestReceiver, capture_request};
use straightup::storage::client::S3StorageClient;
use tempfile::tempdir;

fn capture_client() -> (Client, CaptureRequestReceiver) {
    let (http_client, captured) = capture_request(None);
    let conf = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKIDEXAMPLE", "secret", None, None, "test"))
        .http_client(http_client)
        .build();
    (Client::from_conf(conf), captured)
}

#[test]
fn put_object_carries_key_and_full_file_content() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("report.pdf");
    let payload = b"not really a pdf, but the bytes must match".to_vec();
    fs::write(&file, &payload).expect("write file");

    let (client, captured) = capture_client();
    let storage =
        S3StorageClient::from_client(client, "my-bucket".to_string()).expect("storage client");

    let receipt = storage.upload_file(&file, "report.pdf").expect("upload");
    assert_eq!(receipt.key, "report.pdf");
    assert_eq!(receipt.bucket, "my-bucket");

    let request = captured.expect_request();
    assert_eq!(request.method(), "PUT");

    let uri = request.uri().to_string();
    assert!(uri.contains("my-bucket"), "bucket missing from uri: {uri}");
    assert!(uri.contains("report.pdf"), "key missing from uri: {uri}");

    let body = request.body().bytes().expect("in-memory body");
    assert_eq!(body, payload.as_slice());
}

#[test]
fn object_keys_discard_directory_components_on_the_wire() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("deeply").join("nested");
    fs::create_dir_all(&nested).expect("create nested dirs");
    let file = nested.join("archive.tar.gz");
    fs::write(&file, b"tarball").expect("write file");

    let (client, captured) = capture_client();
    let storage =
        S3StorageClient::from_client(client, "my-bucket".to_string()).expect("storage client");

    storage.upload_file(&file, "archive.tar.gz").expect("upload");

    let uri = captured.expect_request().uri().to_string();
    assert!(uri.contains("archive.tar.gz"), "key missing from uri: {uri}");
    assert!(
        !uri.contains("nested"),
        "directory components must not reach the wire: {uri}"
    );
}

#[test]
fn missing_file_fails_before_any_network_call() {
    let (client, captured) = capture_client();
    let storage =
        S3StorageClient::from_client(client, "my-bucket".to_string()).expect("storage client");

    let result = storage.upload_file(
        std::path::Path::new("/definitely/not/here.txt"),
        "here.txt",
    );
    assert!(result.is_err());

    captured.expect_no_request();
}
