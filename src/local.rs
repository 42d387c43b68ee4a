// Local file loading. The size ceiling is enforced from metadata so an
// oversized file is rejected without pulling it into memory.

use crate::error::{Result, UploadError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file read from disk, ready to be encoded for transport.
#[derive(Debug, Clone)]
pub struct LocalFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub raw_bytes: Vec<u8>,
}

impl LocalFile {
    /// Check existence and size, then read the whole file.
    pub fn load(path: impl AsRef<Path>, max_size: u64) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => UploadError::FileNotFound(path.to_path_buf()),
            _ => UploadError::ReadError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let size_bytes = metadata.len();
        if size_bytes > max_size {
            return Err(UploadError::FileTooLarge {
                size: size_bytes,
                limit: max_size,
            });
        }

        let raw_bytes = std::fs::read(path).map_err(|e| UploadError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), size_bytes, "loaded local file");

        Ok(LocalFile {
            path: path.to_path_buf(),
            size_bytes,
            raw_bytes,
        })
    }

    /// Standard-alphabet, padded base64 of the file content.
    pub fn encode(&self) -> String {
        STANDARD.encode(&self.raw_bytes)
    }

    /// Basename used in commit messages. Falls back to `unknown_file` when
    /// the name is missing or not UTF-8.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown_file")
    }
}
