use crate::endpoint::Endpoint;

/// Checks that an endpoint argument names an S3 bucket
///
/// # Errors
///
/// Returns an error message when the value is not of the form
/// `s3://bucket-name`.
pub fn check_s3_endpoint(raw: &str) -> Result<Endpoint, String> {
    Endpoint::parse(raw).map_err(|e| e.to_string())
}
