use std::fs;

use straightup::endpoint::Endpoint;
use straightup::errors::StraightupError;
use straightup::interfaces::{MockNotifier, MockUploader};
use straightup::ship::run_ship_with_deps;
use straightup::storage::models::UploadReceipt;
use straightup::utils::log_utils::Logger;
use tempfile::tempdir;

#[test]
fn successful_upload_notifies_completion() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("report.pdf");
    fs::write(&file, b"pdf bytes").expect("write file");

    let endpoint = Endpoint::parse("s3://my-bucket").expect("valid endpoint");

    let mut uploader = MockUploader::new();
    uploader
        .expect_upload()
        .withf(|_, key| key == "report.pdf")
        .times(1)
        .returning(|_, key| {
            Ok(UploadReceipt {
                bucket: "my-bucket".to_string(),
                key: key.to_string(),
                etag: Some("d41d8cd98f00b204e9800998ecf8427e".to_string()),
            })
        });

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|title, message| {
            title == "Upload Complete!"
                && message.contains("report.pdf")
                && message.contains("uploaded to s3://my-bucket")
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let logger = Logger::new(0);
    run_ship_with_deps(&endpoint, &file, &uploader, &notifier, &logger).expect("ship succeeds");
}

#[test]
fn failed_upload_notifies_failure_and_returns_an_error() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("report.pdf");
    fs::write(&file, b"pdf bytes").expect("write file");

    let endpoint = Endpoint::parse("s3://my-bucket").expect("valid endpoint");

    let mut uploader = MockUploader::new();
    uploader
        .expect_upload()
        .times(1)
        .returning(|_, _| Err("access denied".into()));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .withf(|title, message| {
            title == "Upload Failed" && message.contains("failed to upload to s3://my-bucket")
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let logger = Logger::new(0);
    let result = run_ship_with_deps(&endpoint, &file, &uploader, &notifier, &logger);
    assert!(matches!(result, Err(StraightupError::Upload(_))));
}

#[test]
fn missing_file_skips_upload_and_notification() {
    let endpoint = Endpoint::parse("s3://my-bucket").expect("valid endpoint");

    let mut uploader = MockUploader::new();
    uploader.expect_upload().never();

    let mut notifier = MockNotifier::new();
    notifier.expect_notify().never();

    let logger = Logger::new(0);
    let result = run_ship_with_deps(
        &endpoint,
        std::path::Path::new("/definitely/not/here.txt"),
        &uploader,
        &notifier,
        &logger,
    );
    assert!(matches!(result, Err(StraightupError::FileNotFound(_))));
}

#[test]
fn notification_failures_are_logged_but_not_propagated() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("notes.txt");
    fs::write(&file, b"notes").expect("write file");

    let endpoint = Endpoint::parse("s3://my-bucket").expect("valid endpoint");

    let mut uploader = MockUploader::new();
    uploader.expect_upload().times(1).returning(|_, key| {
        Ok(UploadReceipt {
            bucket: "my-bucket".to_string(),
            key: key.to_string(),
            etag: None,
        })
    });

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .times(1)
        .returning(|_, _| Err("osascript not found".into()));

    let logger = Logger::new(0);
    run_ship_with_deps(&endpoint, &file, &uploader, &notifier, &logger)
        .expect("a broken notifier must not fail the upload");
}
