//! Repository manifest loading.
//!
//! The repository scanner publishes its view of the language collections as
//! a `readmes.json` file at the repository root. This module loads and
//! validates that file; it never walks the repository tree itself.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogSource, RemoteCatalog, StaticCatalog};
use crate::domain::LanguageInventory;
use crate::error::{ReadmesError, Result};

/// Manifest file name expected at the repository root.
pub const MANIFEST_FILE: &str = "readmes.json";

/// Top-level manifest structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Language collections described by the repository scanner.
    #[serde(default)]
    pub languages: Vec<LanguageInventory>,
    /// Inline approved-project list (master-list variant).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_projects: Option<Vec<String>>,
    /// Remote approved-project catalog URL (sitemap variant).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_url: Option<String>,
}

impl Manifest {
    /// Resolve the catalog source configured by this manifest.
    ///
    /// Exactly one of `approved_projects` and `projects_url` must be set.
    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        match (&self.approved_projects, &self.projects_url) {
            (Some(slugs), None) => Ok(Box::new(StaticCatalog::new(slugs.clone()))),
            (None, Some(url)) => Ok(Box::new(RemoteCatalog::new(url.clone()))),
            (Some(_), Some(_)) => Err(ReadmesError::Manifest(
                "manifest sets both approved_projects and projects_url".to_string(),
            )),
            (None, None) => Err(ReadmesError::Manifest(
                "manifest must set approved_projects or projects_url".to_string(),
            )),
        }
    }
}

/// Load and validate the manifest under the given repository root.
pub fn load_manifest(root: &Path) -> Result<Manifest> {
    let path = root.join(MANIFEST_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|err| ReadmesError::Manifest(format!("reading {}: {err}", path.display())))?;
    let manifest: Manifest = serde_json::from_str(&contents)
        .map_err(|err| ReadmesError::Manifest(format!("parsing {}: {err}", path.display())))?;
    validate(&manifest)?;
    log::info!(
        "loaded manifest with {} language collections",
        manifest.languages.len()
    );
    Ok(manifest)
}

fn validate(manifest: &Manifest) -> Result<()> {
    if manifest.approved_projects.is_some() && manifest.projects_url.is_some() {
        return Err(ReadmesError::Manifest(
            "manifest sets both approved_projects and projects_url".to_string(),
        ));
    }
    if manifest.approved_projects.is_none() && manifest.projects_url.is_none() {
        return Err(ReadmesError::Manifest(
            "manifest must set approved_projects or projects_url".to_string(),
        ));
    }

    let mut seen = BTreeSet::new();
    for language in &manifest.languages {
        if language.name.trim().is_empty() || language.path_name.trim().is_empty() {
            return Err(ReadmesError::Manifest(
                "language collection with an empty name".to_string(),
            ));
        }
        if !seen.insert(language.path_name.as_str()) {
            return Err(ReadmesError::Manifest(format!(
                "duplicate language path name: {}",
                language.path_name
            )));
        }
    }
    Ok(())
}
