use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};

use crate::errors::StraightupError;
use crate::storage::models::S3Config;

/// Storage endpoint host all uploads are sent to.
pub const S3_ENDPOINT_HOST: &str = "s3.amazonaws.com";

/// Blocking wrapper around the S3 SDK client.
///
/// Owns its tokio runtime so callers stay synchronous; the single
/// `put_object` call is driven with `block_on`.
pub struct S3StorageClient {
    pub(crate) bucket_name: String,
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
}

impl S3StorageClient {
    /// Create a new client from the provided config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(config: S3Config) -> Result<Self, StraightupError> {
        // Static credentials from the environment; no profile or IMDS lookup
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "StraightupStaticCredentials",
        );

        let sdk_config = aws_sdk_s3::Config::builder()
            .region(Region::new(config.region.clone()))
            .endpoint_url(format!("https://{S3_ENDPOINT_HOST}"))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::standard().with_max_attempts(3))
            .behavior_version(BehaviorVersion::latest())
            .build();

        Self::from_client(Client::from_conf(sdk_config), config.bucket)
    }

    /// Wrap an already-built SDK client.
    ///
    /// Tests use this to substitute a client whose HTTP connection is
    /// captured instead of sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn from_client(client: Client, bucket_name: String) -> Result<Self, StraightupError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| StraightupError::Runtime(format!("failed to create runtime: {e}")))?;

        Ok(Self {
            bucket_name,
            client,
            runtime,
        })
    }

    /// Name of the destination bucket this client is bound to.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}
