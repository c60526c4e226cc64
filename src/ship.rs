//! `ship` command: upload one file and report the outcome.

use std::path::Path;

use crate::endpoint::Endpoint;
use crate::errors::StraightupError;
use crate::interfaces::{Notifier, Uploader};
use crate::notify::OsaScriptNotifier;
use crate::storage::client::S3StorageClient;
use crate::storage::models::S3Config;
use crate::utils::log_utils::Logger;

/// Upload `file_path` to the bucket named by `endpoint` and fire a
/// desktop notification with the outcome.
///
/// Credentials are resolved from the environment before any other side
/// effect; a missing key or secret aborts the run.
///
/// # Errors
///
/// Returns an error for missing credentials, a missing or unreadable
/// file, or a failed upload.
pub fn run_ship(
    endpoint: &Endpoint,
    file_path: &Path,
    logger: &Logger,
) -> Result<(), StraightupError> {
    let config = S3Config::from_env(endpoint)?;
    logger.debug(&format!(
        "region: {}, bucket: {}",
        config.region, config.bucket
    ));

    let client = S3StorageClient::new(config)?;

    run_ship_with_deps(endpoint, file_path, &client, &OsaScriptNotifier, logger)
}

/// `run_ship` with the upload and notification seams injected, for tests.
///
/// # Errors
///
/// Returns an error for a missing file or a failed upload; notification
/// failures are logged, never propagated.
pub fn run_ship_with_deps(
    endpoint: &Endpoint,
    file_path: &Path,
    uploader: &dyn Uploader,
    notifier: &dyn Notifier,
    logger: &Logger,
) -> Result<(), StraightupError> {
    let key = object_key(file_path)?;

    // Check before touching the network so a bad path never produces an
    // upload attempt or a notification.
    if !file_path.exists() {
        return Err(StraightupError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    match uploader.upload(file_path, &key) {
        Ok(receipt) => {
            logger.info(&format!(
                "uploaded, etag {}",
                receipt.etag.as_deref().unwrap_or("<none>")
            ));
            println!("Uploaded {key} to {endpoint}");
            send_notification(
                notifier,
                "Upload Complete!",
                &format!("{} uploaded to {}", file_path.display(), endpoint),
                logger,
            );
            Ok(())
        }
        Err(e) => {
            send_notification(
                notifier,
                "Upload Failed",
                &format!("{} failed to upload to {}", file_path.display(), endpoint),
                logger,
            );
            Err(StraightupError::Upload(e.to_string()))
        }
    }
}

/// Object key for a local path: the final path segment with directory
/// components discarded.
///
/// # Errors
///
/// Returns `PathError` for paths without a final segment or with a
/// non-UTF-8 file name.
pub fn object_key(file_path: &Path) -> Result<String, StraightupError> {
    file_path
        .file_name()
        .and_then(|n| n.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| {
            StraightupError::PathError(format!("no file name in '{}'", file_path.display()))
        })
}

fn send_notification(notifier: &dyn Notifier, title: &str, message: &str, logger: &Logger) {
    // Notification output and failures are logged, never acted upon
    if let Err(e) = notifier.notify(title, message) {
        logger.normal(&format!("Notification failed: {e}"));
    }
}
