#![deny(missing_docs)]
//! Sample Programs README generation core.
//!
//! This crate contains the domain types, completion analysis, link building,
//! and Markdown assembly that power the `sample-readmes` CLI.

pub mod analyzer;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod links;
pub mod manifest;
pub mod markdown;
pub mod report;

pub use analyzer::{MAX_BUCKET, analyze, status_bucket};
pub use catalog::{CatalogSource, RemoteCatalog, StaticCatalog};
pub use domain::{CompletionReport, LanguageInventory, ProgramEntry, TestConfig};
pub use error::{ReadmesError, Result};
pub use links::{Icon, completed_link, display_title, missing_link, requirements_url};
pub use manifest::{MANIFEST_FILE, Manifest, load_manifest};
pub use markdown::{Block, Inline, render_markdown};
pub use report::{ReadmeCatalog, ReadmePage, STATUS_INDICATORS, build_readme};
