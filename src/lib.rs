// Library root
// -----------
// `gup` uploads one local file to one path of a GitHub repository. The
// binary (`main.rs`) only parses arguments and hands off to `workflow`.
//
// Module responsibilities:
// - `access`: parses the raw-content URL into repository coordinates and
//   the access token.
// - `local`: loads the local file under the size ceiling and base64-encodes it.
// - `api`: blocking client for the contents API (probe with GET, write with PUT).
// - `workflow`: runs the steps in order and prints progress.
// - `config`, `cli`, `error`: settings, argument surface and error taxonomy.
pub mod access;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod local;
pub mod workflow;

pub use error::{Result, UploadError};
