//! Approved-project catalog sources.
//!
//! The authoritative approved-project set comes either from a list baked
//! into the repository manifest or from a remote catalog endpoint. Both are
//! hidden behind [`CatalogSource`] so the rest of the pipeline never knows
//! which one is in use.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::error::{ReadmesError, Result};

/// Default timeout for the remote catalog fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of the authoritative approved-project identifier set.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource {
    /// Return the approved project slugs, normalized to lowercase.
    fn approved_projects(&self) -> Result<BTreeSet<String>>;
}

/// Fixed, in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    slugs: Vec<String>,
}

impl StaticCatalog {
    /// Build a catalog from any collection of slug strings.
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }
}

impl CatalogSource for StaticCatalog {
    fn approved_projects(&self) -> Result<BTreeSet<String>> {
        Ok(normalize_slugs(self.slugs.iter().map(String::as_str)))
    }
}

/// Catalog fetched once from a remote JSON endpoint.
///
/// The endpoint must answer with a JSON array of slug strings. The fetch is
/// fail-fast: no retries and no caching.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    url: String,
    timeout: Duration,
}

impl RemoteCatalog {
    /// Create a remote catalog for the given URL with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl CatalogSource for RemoteCatalog {
    fn approved_projects(&self) -> Result<BTreeSet<String>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| ReadmesError::Catalog(format!("building http client: {err}")))?;
        let response = client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|err| ReadmesError::Catalog(format!("fetching {}: {err}", self.url)))?;
        let slugs: Vec<String> = response
            .json()
            .map_err(|err| ReadmesError::Catalog(format!("parsing {}: {err}", self.url)))?;
        log::debug!("remote catalog at {} returned {} slugs", self.url, slugs.len());
        Ok(normalize_slugs(slugs.iter().map(String::as_str)))
    }
}

fn normalize_slugs<'a>(slugs: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    slugs
        .map(|slug| slug.trim().to_lowercase())
        .filter(|slug| !slug.is_empty())
        .collect()
}
