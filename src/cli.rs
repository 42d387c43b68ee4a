// Command-line surface. Two required flags; argument errors go to stdout
// with a usage example and exit code 1.

use crate::access::EXPECTED_URL_SHAPE;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "gup",
    version,
    about = "Upload a file to a GitHub repository through the contents API."
)]
pub struct Cli {
    /// Local file to upload.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// raw.githubusercontent.com URL of the target path, with `?token=<token>` appended.
    #[arg(short = 'u', long = "github-url", value_name = "URL")]
    pub github_url: String,
}

pub fn usage() -> String {
    format!(
        "Usage: gup -f <FILE> -u <URL>\nExample: gup -f ./example.txt -u {}",
        EXPECTED_URL_SHAPE
    )
}

/// Print a clap error the way this tool reports it. Help and version
/// requests are not failures.
pub fn report_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{}", err);
            ExitCode::SUCCESS
        }
        _ => {
            print!("{}", err);
            println!("{}", usage());
            ExitCode::from(1)
        }
    }
}
