use std::fmt;

use crate::errors::StraightupError;

/// Scheme prefix accepted for destination endpoints.
pub const S3_SCHEME: &str = "s3://";

/// A validated destination endpoint of the form `s3://bucket-name`.
///
/// The scheme check is case-sensitive; only the literal `s3://` prefix is
/// recognized.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Endpoint {
    raw: String,
}

impl Endpoint {
    /// Parse and validate an endpoint string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEndpoint` when the string does not start with
    /// `s3://` or names no bucket.
    pub fn parse(raw: &str) -> Result<Self, StraightupError> {
        match raw.strip_prefix(S3_SCHEME) {
            Some(bucket) if !bucket.is_empty() => Ok(Self {
                raw: raw.to_string(),
            }),
            _ => Err(StraightupError::InvalidEndpoint(raw.to_string())),
        }
    }

    /// The full endpoint string as the user supplied it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The bucket name, i.e. the endpoint with the scheme stripped.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.raw[S3_SCHEME.len()..]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
