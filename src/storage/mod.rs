//! Blocking S3 storage client used by the `ship` command.

pub mod client;
pub mod models;
pub mod upload;

pub use client::{S3_ENDPOINT_HOST, S3StorageClient};
pub use models::{S3Config, UploadReceipt};
