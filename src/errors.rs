use thiserror::Error;

#[derive(Debug, Error)]
pub enum StraightupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid s3 endpoint '{0}', expected format 's3://bucket-name'")]
    InvalidEndpoint(String),

    #[error("'AWS_ACCESS_KEY_ID' and 'AWS_SECRET_ACCESS_KEY' must be set")]
    MissingCredentials,

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("home directory could not be determined")]
    HomeDirError,

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
