// The upload pipeline: parse the access URL, load the file, probe the
// remote path, then create or update it. Each step feeds the next and the
// first error ends the run; nothing is retried.

use crate::access::AccessDescriptor;
use crate::api::{ContentClient, RemoteFileState, WriteRequest, WriteResult};
use crate::config::UploaderConfig;
use crate::error::Result;
use crate::local::LocalFile;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Commit message for the write: "创建" (create) for a new path, "更新"
/// (update) when the path already exists.
pub fn commit_message(state: &RemoteFileState, file_name: &str) -> String {
    match state {
        RemoteFileState::Absent => format!("创建 {}", file_name),
        RemoteFileState::Present { .. } => format!("更新 {}", file_name),
    }
}

/// Holds the HTTP client and settings for one invocation.
pub struct Uploader {
    api: ContentClient,
    config: UploaderConfig,
}

impl Uploader {
    pub fn new(config: UploaderConfig) -> Result<Self> {
        let api = ContentClient::new(&config)?;
        Ok(Uploader { api, config })
    }

    /// Run the whole pipeline, printing progress lines to stdout.
    pub fn upload(&self, file_path: &Path, url: &str) -> Result<WriteResult> {
        println!("Uploading {} to GitHub...", file_path.display());

        let access = AccessDescriptor::parse(url)?;
        println!("Parsed URL:");
        println!("- repository: {}", access.repo());
        println!("- branch: {}", access.branch);
        println!("- path: {}", access.remote_path);

        let file = LocalFile::load(file_path, self.config.max_file_size)?;
        let content = file.encode();

        let state = self.api.probe(&access)?;
        if state.exists() {
            println!("Remote file exists, it will be updated");
        } else {
            println!("Remote file does not exist, it will be created");
        }

        let message = commit_message(&state, file.file_name());
        let request = WriteRequest::new(message, content, access.branch.clone(), &state);
        info!(
            repo = %access.repo(),
            path = %access.remote_path,
            size_bytes = file.size_bytes,
            update = state.exists(),
            "sending write request"
        );

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Uploading...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = self.api.write(&access, &request);
        spinner.finish_and_clear();

        result
    }
}
