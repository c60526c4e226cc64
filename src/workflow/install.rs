use std::fs;
use std::path::{Path, PathBuf};

use crate::endpoint::Endpoint;
use crate::errors::StraightupError;
use crate::workflow::templates;

/// Fixed engine label used in the service menu title.
pub const ENGINE: &str = "s3";

/// Paths written for an installed workflow bundle.
pub struct InstalledBundle {
    pub contents_dir: PathBuf,
    pub info_plist: PathBuf,
    pub document_wflow: PathBuf,
    /// Menu title shown under Services, e.g. `Upload to S3 - my-bucket!`.
    pub menu_title: String,
}

/// Bundle directory name for a bucket, e.g. `Upload to S3 - my-bucket!.workflow`.
#[must_use]
pub fn bundle_dir_name(bucket_name: &str) -> String {
    format!("Upload to S3 - {bucket_name}!.workflow")
}

/// Write the workflow bundle for `endpoint` under `services_dir`.
///
/// Creates missing parent directories and silently overwrites an existing
/// bundle of the same name.
///
/// # Errors
///
/// Returns an error if the bundle directory or either document cannot be
/// written.
pub fn install_bundle(
    services_dir: &Path,
    endpoint: &Endpoint,
) -> Result<InstalledBundle, StraightupError> {
    let bucket_name = endpoint.bucket();
    let contents_dir = services_dir
        .join(bundle_dir_name(bucket_name))
        .join("Contents");

    fs::create_dir_all(&contents_dir)?;

    let info_plist = contents_dir.join("Info.plist");
    fs::write(&info_plist, templates::info_plist(ENGINE, bucket_name))?;

    let document_wflow = contents_dir.join("document.wflow");
    fs::write(&document_wflow, templates::document_wflow(endpoint.as_str()))?;

    Ok(InstalledBundle {
        contents_dir,
        info_plist,
        document_wflow,
        menu_title: format!("Upload to S3 - {bucket_name}!"),
    })
}
