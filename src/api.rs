// Contents API client: a small blocking HTTP client that reads and writes
// a single file at a repository path. One client (and its connection pool)
// is shared by the probe and the write of a run.

use crate::access::AccessDescriptor;
use crate::config::UploaderConfig;
use crate::error::{Result, UploadError};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Versioned media type of the GitHub REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// What the remote side currently holds at the target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFileState {
    Absent,
    /// The blob sha must accompany any update of this path.
    Present { sha: String },
}

impl RemoteFileState {
    pub fn exists(&self) -> bool {
        matches!(self, RemoteFileState::Present { .. })
    }

    pub fn version_marker(&self) -> Option<&str> {
        match self {
            RemoteFileState::Present { sha } => Some(sha),
            RemoteFileState::Absent => None,
        }
    }
}

/// Body of the PUT request. `sha` is only serialized for updates.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub message: String,
    pub content: String,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl WriteRequest {
    pub fn new(
        message: impl Into<String>,
        content: String,
        branch: impl Into<String>,
        state: &RemoteFileState,
    ) -> Self {
        WriteRequest {
            message: message.into(),
            content,
            branch: branch.into(),
            sha: state.version_marker().map(str::to_string),
        }
    }
}

/// Outcome of an accepted write. The commit id is absent when the API
/// response does not carry a `commit` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    pub new_commit_id: Option<String>,
}

/// The subset of the contents API response we read. Both the GET and the
/// PUT answer with this shape (the PUT nests the file under `content`).
#[derive(Deserialize, Debug)]
struct ContentsResponse {
    sha: Option<String>,
    commit: Option<CommitRef>,
}

#[derive(Deserialize, Debug)]
struct CommitRef {
    sha: Option<String>,
}

pub struct ContentClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl ContentClient {
    pub fn new(config: &UploaderConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| UploadError::RequestConstruction(format!("failed to build HTTP client: {}", e)))?;
        Ok(ContentClient {
            client,
            base_url: config.api_base_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// `{base}/repos/{owner}/{repo}/contents/{path}`
    pub fn contents_url(&self, access: &AccessDescriptor) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.base_url,
            access.repo(),
            access.remote_path
        )
    }

    /// Authorization, Accept and User-Agent, shared by both calls.
    fn headers(&self, access: &AccessDescriptor) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("token {}", access.token))
            .map_err(|_| UploadError::RequestConstruction("token is not a valid header value".into()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        let agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|_| UploadError::RequestConstruction("user agent is not a valid header value".into()))?;
        headers.insert(USER_AGENT, agent);
        Ok(headers)
    }

    /// GET the target path. 200 means the file exists and its `sha` is
    /// returned; 404 means it does not.
    pub fn probe(&self, access: &AccessDescriptor) -> Result<RemoteFileState> {
        let url = self.contents_url(access);
        debug!(%url, "probing remote file");
        let res = self.client.get(&url).headers(self.headers(access)?).send()?;
        let status = res.status();
        debug!(status = status.as_u16(), "probe response");

        match status {
            StatusCode::OK => {
                let body: ContentsResponse = parse_json(res)?;
                let sha = body
                    .sha
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| UploadError::ResponseParse("response has no `sha` field".into()))?;
                Ok(RemoteFileState::Present { sha })
            }
            StatusCode::NOT_FOUND => Ok(RemoteFileState::Absent),
            _ => Err(remote_error(res)),
        }
    }

    /// PUT the new content. 200 and 201 are both accepted.
    pub fn write(&self, access: &AccessDescriptor, req: &WriteRequest) -> Result<WriteResult> {
        let url = self.contents_url(access);
        debug!(%url, update = req.sha.is_some(), "writing remote file");
        let mut headers = self.headers(access)?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let res = self.client.put(&url).headers(headers).json(req).send()?;
        let status = res.status();
        debug!(status = status.as_u16(), "write response");

        match status {
            StatusCode::OK | StatusCode::CREATED => {
                let body: ContentsResponse = parse_json(res)?;
                let new_commit_id = body.commit.and_then(|c| c.sha);
                if new_commit_id.is_none() {
                    warn!("write accepted but response carries no commit id");
                }
                Ok(WriteResult { new_commit_id })
            }
            _ => Err(remote_error(res)),
        }
    }
}

fn parse_json(res: Response) -> Result<ContentsResponse> {
    let text = res
        .text()
        .map_err(|e| UploadError::ResponseParse(format!("failed to read body: {}", e)))?;
    serde_json::from_str(&text).map_err(|e| UploadError::ResponseParse(e.to_string()))
}

fn remote_error(res: Response) -> UploadError {
    let status = res.status().as_u16();
    let body = res.text().unwrap_or_else(|_| "".into());
    UploadError::RemoteApi { status, body }
}
