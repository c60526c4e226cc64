use std::error::Error;
use std::fs;
use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;

use crate::errors::StraightupError;
use crate::interfaces::Uploader;
use crate::storage::client::S3StorageClient;
use crate::storage::models::UploadReceipt;

impl S3StorageClient {
    /// Upload a local file under `object_key`.
    ///
    /// The file is read fully into memory and sent in a single
    /// `put_object` call. No retry beyond the SDK's own retry config, no
    /// multipart handling, no progress reporting.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, or if the
    /// `put_object` call fails.
    pub fn upload_file(
        &self,
        local_path: &Path,
        object_key: &str,
    ) -> Result<UploadReceipt, StraightupError> {
        if !local_path.exists() {
            return Err(StraightupError::FileNotFound(
                local_path.display().to_string(),
            ));
        }

        let content = fs::read(local_path)?;

        self.runtime.block_on(async {
            let response = self
                .client
                .put_object()
                .bucket(&self.bucket_name)
                .key(object_key)
                .body(ByteStream::from(content))
                .send()
                .await
                .map_err(|e| {
                    StraightupError::Upload(format!("failed to upload to storage: {e}"))
                })?;

            // ETags come back quoted
            let etag = response.e_tag().map(|t| t.replace('"', ""));

            Ok(UploadReceipt {
                bucket: self.bucket_name.clone(),
                key: object_key.to_string(),
                etag,
            })
        })
    }
}

impl Uploader for S3StorageClient {
    fn upload(
        &self,
        local_path: &Path,
        object_key: &str,
    ) -> Result<UploadReceipt, Box<dyn Error>> {
        self.upload_file(local_path, object_key).map_err(Into::into)
    }
}
