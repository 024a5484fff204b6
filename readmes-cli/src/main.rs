#![deny(missing_docs)]
//! Sample Programs README generator command-line interface.
//!
//! Loads the repository manifest, resolves the approved-project catalog, and
//! writes one README per language collection under the repository archive.

use clap::Parser;
use log::LevelFilter;
use readmes_core::{ReadmeCatalog, load_manifest, render_markdown};
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(
    name = "sample-readmes",
    version,
    about = "Generate per-language READMEs for a Sample Programs repository"
)]
struct Cli {
    /// Repository root containing the readmes.json manifest.
    path: PathBuf,
    /// Logging verbosity (off, error, warning, info, debug, trace).
    #[arg(long = "log", default_value = "warning", value_parser = parse_log_level)]
    log: LevelFilter,
}

#[cfg(not(test))]
fn main() -> CliResult<()> {
    let cli = Cli::parse();
    env_logger::Builder::new().filter_level(cli.log).init();
    run(&cli.path)
}

#[cfg(test)]
fn main() {}

fn run(root: &Path) -> CliResult<()> {
    let manifest = load_manifest(root)?;
    let catalog = manifest.catalog_source()?;
    let readmes = ReadmeCatalog::generate(&manifest.languages, catalog.as_ref())?;
    write_pages(root, &readmes)?;
    log::info!("wrote {} README files", readmes.pages.len());
    Ok(())
}

/// Parse a logging level name from the fixed enumeration, case-insensitive.
fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    match value.to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(format!("invalid log level: {other}")),
    }
}

/// Write every generated page beneath the repository root.
///
/// Pages are only written once all of them have been built, so a fatal
/// error earlier in the run leaves no partial output behind.
fn write_pages(root: &Path, readmes: &ReadmeCatalog) -> CliResult<()> {
    for (language, page) in &readmes.pages {
        let dir = root.join(&page.relative_dir);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("README.md");
        std::fs::write(&path, render_markdown(&page.blocks))?;
        log::debug!("wrote {language} README to {}", path.display());
    }
    Ok(())
}
