use mockall::automock;
use std::error::Error;
use std::path::Path;

use crate::storage::models::UploadReceipt;

/// Interface for the object-storage upload call to facilitate testing
#[automock]
pub trait Uploader {
    fn upload(
        &self,
        local_path: &Path,
        object_key: &str,
    ) -> Result<UploadReceipt, Box<dyn Error>>;
}

/// Interface for desktop notifications to facilitate testing
#[automock]
pub trait Notifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), Box<dyn Error>>;
}
