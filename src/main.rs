//! pagecheck - HTML selector presence checker

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use pagecheck::{CheckSet, DocumentSource, PresenceReport, Result};

#[derive(Parser)]
#[command(name = "pagecheck")]
#[command(version, about = "Checks an HTML document for the presence of CSS selectors", long_about = None)]
#[command(after_help = "EXAMPLES:
    pagecheck -f index.html                     Check local file against checks.json
    pagecheck -f index.html -c selectors.json   Check against a custom selector list
    pagecheck -u https://example.com            Check a remote page")]
struct Cli {
    /// Path to the HTML file to check
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Path to the JSON array of selectors to check for
    #[arg(short, long, value_name = "PATH", default_value = "checks.json")]
    checks: PathBuf,

    /// URL of the HTML page to check
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configuration errors are caught before any I/O happens.
    let source = match (&cli.file, &cli.url) {
        (Some(_), Some(_)) => {
            eprintln!("error: use either --file or --url, not both");
            return ExitCode::FAILURE;
        }
        (Some(file), None) => {
            if !assert_exists(file) {
                return ExitCode::FAILURE;
            }
            DocumentSource::File(file.clone())
        }
        (None, Some(url)) => DocumentSource::Url(url.clone()),
        (None, None) => {
            eprintln!("error: either --file or --url is required");
            return ExitCode::FAILURE;
        }
    };

    if !assert_exists(&cli.checks) {
        return ExitCode::FAILURE;
    }

    match run(&source, &cli.checks) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Check that a required path exists, printing a diagnostic if not.
fn assert_exists(path: &Path) -> bool {
    if path.exists() {
        true
    } else {
        eprintln!("{} does not exist. Exiting.", path.display());
        false
    }
}

fn run(source: &DocumentSource, checks_path: &Path) -> Result<()> {
    let checks = CheckSet::load(checks_path)?;
    let document = source.load()?;
    let report = PresenceReport::evaluate(&document, &checks)?;
    report.write_pretty(std::io::stdout())
}
