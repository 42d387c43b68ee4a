// Access URL parsing. The tool is handed a raw.githubusercontent.com URL
// with the token appended as a query parameter, and everything needed to
// talk to the contents API is pulled out of it in one anchored match.

use crate::error::{Result, UploadError};
use regex::Regex;
use std::sync::LazyLock;

/// Shape shown to the user when the URL does not parse.
pub const EXPECTED_URL_SHAPE: &str =
    "https://raw.githubusercontent.com/<owner>/<repo>/refs/heads/<branch>/<path>?token=<token>";

static ACCESS_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https://raw\.githubusercontent\.com/([^/]+)/([^/]+)/refs/heads/([^/]+)/(.+)\?token=(.+)$",
    )
    .expect("ACCESS_URL_RE regex should compile")
});

/// Repository coordinates plus credential. Immutable once parsed and every
/// field is non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessDescriptor {
    pub owner: String,
    pub repo_name: String,
    pub branch: String,
    /// Path inside the repository; may contain `/`.
    pub remote_path: String,
    pub token: String,
}

impl AccessDescriptor {
    pub fn parse(url: &str) -> Result<Self> {
        let caps = ACCESS_URL_RE
            .captures(url)
            .ok_or_else(|| UploadError::MalformedUrl(format!("expected {}", EXPECTED_URL_SHAPE)))?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default();

        Ok(AccessDescriptor {
            owner: group(1),
            repo_name: group(2),
            branch: group(3),
            remote_path: group(4),
            token: group(5),
        })
    }

    /// `owner/repo`, as used in API paths and progress output.
    pub fn repo(&self) -> String {
        format!("{}/{}", self.owner, self.repo_name)
    }
}

// Hand-written so the token never ends up in logs or panic messages.
impl std::fmt::Debug for AccessDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessDescriptor")
            .field("owner", &self.owner)
            .field("repo_name", &self.repo_name)
            .field("branch", &self.branch)
            .field("remote_path", &self.remote_path)
            .field("token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_all_components() {
        let d = AccessDescriptor::parse(
            "https://raw.githubusercontent.com/octo/notes/refs/heads/main/docs/daily/notes.txt?token=ghp_abc",
        )
        .unwrap();
        assert_eq!(d.owner, "octo");
        assert_eq!(d.repo_name, "notes");
        assert_eq!(d.branch, "main");
        assert_eq!(d.remote_path, "docs/daily/notes.txt");
        assert_eq!(d.token, "ghp_abc");
        assert_eq!(d.repo(), "octo/notes");
    }

    #[test]
    fn test_parse_top_level_path() {
        let d = AccessDescriptor::parse(
            "https://raw.githubusercontent.com/a/b/refs/heads/dev/x.bin?token=t",
        )
        .unwrap();
        assert_eq!(d.branch, "dev");
        assert_eq!(d.remote_path, "x.bin");
        assert_eq!(d.token, "t");
    }

    #[test]
    fn test_parse_rejects_malformed_urls() {
        let bad = [
            "",
            "not a url",
            // wrong host
            "https://github.com/a/b/refs/heads/main/x.txt?token=t",
            // plain http
            "http://raw.githubusercontent.com/a/b/refs/heads/main/x.txt?token=t",
            // missing refs/heads
            "https://raw.githubusercontent.com/a/b/main/x.txt?token=t",
            // missing token
            "https://raw.githubusercontent.com/a/b/refs/heads/main/x.txt",
            "https://raw.githubusercontent.com/a/b/refs/heads/main/x.txt?token=",
            // missing path
            "https://raw.githubusercontent.com/a/b/refs/heads/main/?token=t",
            // empty owner
            "https://raw.githubusercontent.com//b/refs/heads/main/x.txt?token=t",
            // surrounding whitespace
            " https://raw.githubusercontent.com/a/b/refs/heads/main/x.txt?token=t",
            "https://raw.githubusercontent.com/a/b/refs/heads/main/x.txt?token=t\n",
        ];
        for url in bad {
            let err = AccessDescriptor::parse(url).unwrap_err();
            assert!(
                matches!(err, UploadError::MalformedUrl(_)),
                "{url:?} should be malformed, got {err:?}"
            );
        }
    }

    #[test]
    fn test_debug_hides_token() {
        let d = AccessDescriptor::parse(
            "https://raw.githubusercontent.com/a/b/refs/heads/main/x.txt?token=secret-token",
        )
        .unwrap();
        let rendered = format!("{:?}", d);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("***"));
    }
}
