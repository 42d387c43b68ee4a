// Error taxonomy for the upload pipeline. Every step returns one of these
// and the first failure ends the run.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an upload.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The access URL does not have the expected raw-content shape.
    #[error("malformed GitHub URL: {0}")]
    MalformedUrl(String),

    #[error("file {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// Size is checked from metadata, before any content is read.
    #[error("file size ({:.2} MB) exceeds the limit ({} MB)", mib(.size), mib(.limit))]
    FileTooLarge { size: u64, limit: u64 },

    #[error("failed to read {}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content API answered with a status we do not accept.
    #[error("GitHub API returned {status}: {body}")]
    RemoteApi { status: u16, body: String },

    #[error("failed to parse API response: {0}")]
    ResponseParse(String),

    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    /// Connection, DNS or TLS failure before any status was received.
    #[error("request to the GitHub API failed")]
    Transport(#[from] reqwest::Error),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, UploadError>;

fn mib(bytes: &u64) -> f64 {
    *bytes as f64 / 1024.0 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_message_reports_mib() {
        let err = UploadError::FileTooLarge {
            size: 150 * 1024 * 1024,
            limit: 100 * 1024 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "file size (150.00 MB) exceeds the limit (100 MB)"
        );
    }

    #[test]
    fn test_remote_api_message_carries_status_and_body() {
        let err = UploadError::RemoteApi {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "GitHub API returned 500: boom");
    }
}
