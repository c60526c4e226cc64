use std::env;

use crate::endpoint::Endpoint;
use crate::errors::StraightupError;

/// Region used when `AWS_REGION` is unset.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for the S3 client, resolved once per `ship` invocation.
pub struct S3Config {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub bucket: String,
}

impl S3Config {
    /// Resolve client configuration from the process environment.
    ///
    /// Credentials are validated eagerly; an unset or empty key variable
    /// aborts before any client is constructed. The destination bucket is
    /// taken from `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` when `AWS_ACCESS_KEY_ID` or
    /// `AWS_SECRET_ACCESS_KEY` is unset or empty.
    pub fn from_env(endpoint: &Endpoint) -> Result<Self, StraightupError> {
        let access_key = env::var("AWS_ACCESS_KEY_ID")
            .ok()
            .filter(|v| !v.is_empty());
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY")
            .ok()
            .filter(|v| !v.is_empty());

        let (Some(access_key), Some(secret_key)) = (access_key, secret_key) else {
            return Err(StraightupError::MissingCredentials);
        };

        let region = env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Ok(Self {
            access_key,
            secret_key,
            region,
            bucket: endpoint.bucket().to_string(),
        })
    }
}

/// Represents the result of a completed upload.
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub bucket: String,
    pub key: String,
    pub etag: Option<String>,
}
