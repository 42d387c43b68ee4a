//! Property-based tests for access URL parsing and file encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gup::access::AccessDescriptor;
use gup::local::LocalFile;
use proptest::prelude::*;
use tempfile::TempDir;

/// A single path segment: no `/`, no `?`.
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Za-z0-9._-]{1,16}").unwrap()
}

/// A repository path of one to four segments joined by `/`.
fn arb_remote_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..5).prop_map(|segments| segments.join("/"))
}

fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Za-z0-9_]{1,40}").unwrap()
}

proptest! {
    /// Every well-formed access URL yields back exactly the parts it was built from.
    #[test]
    fn access_url_components_survive_parsing(
        owner in arb_segment(),
        repo in arb_segment(),
        branch in arb_segment(),
        path in arb_remote_path(),
        token in arb_token(),
    ) {
        let url = format!(
            "https://raw.githubusercontent.com/{}/{}/refs/heads/{}/{}?token={}",
            owner, repo, branch, path, token
        );
        let parsed = AccessDescriptor::parse(&url).unwrap();

        prop_assert_eq!(parsed.owner, owner);
        prop_assert_eq!(parsed.repo_name, repo);
        prop_assert_eq!(parsed.branch, branch);
        prop_assert_eq!(parsed.remote_path, path);
        prop_assert_eq!(parsed.token, token);
    }

    /// Whatever bytes are on disk, decoding the encoded content gives them back.
    #[test]
    fn encoded_file_content_decodes_to_original(
        bytes in prop::collection::vec(any::<u8>(), 0..4096),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payload.bin");
        std::fs::write(&path, &bytes).unwrap();

        let file = LocalFile::load(&path, gup::config::MAX_FILE_SIZE).unwrap();
        prop_assert_eq!(file.size_bytes, bytes.len() as u64);

        let decoded = STANDARD.decode(file.encode()).unwrap();
        prop_assert_eq!(decoded, bytes);
    }
}
