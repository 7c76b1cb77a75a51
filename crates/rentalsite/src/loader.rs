// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Content loading: the only path from page routines to content documents.
//!
//! A `ContentSource` fetches raw bytes for an absolute content path such as
//! `/content/site.json`; `load_json` parses them into a typed document.

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Somewhere content documents can be fetched from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one document. Anything other than a successful read is an error.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Fetch a content document and parse it as JSON.
pub async fn load_json<T>(source: &dyn ContentSource, path: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    diagnostics::log_debug!("Loading {path} from {origin}", path: path, origin: source.describe());
    let bytes = source.fetch(path).await?;
    serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
        path: path.to_string(),
        source,
    })
}

/// Pick a source for a `--content` argument: URLs go over HTTP, anything
/// else is a local directory.
pub fn open_source(location: &str) -> Result<Box<dyn ContentSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(DirSource::new(location)))
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// Content served by the deployed site (or any static host).
///
/// Caching is disabled on every request so freshly published CMS edits are
/// always picked up.
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { base, client })
    }

    /// Resolve a content path against the base URL.
    ///
    /// Content paths are site-absolute, so a base of
    /// `https://example.com/preview/` still serves `/content/...` from the root
    /// of that host's preview prefix.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        let relative = path.trim_start_matches('/');
        let mut base = self.base.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(relative)?)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Load {
                path: path.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

// ---------------------------------------------------------------------------
// Local directory
// ---------------------------------------------------------------------------

/// Content checked out on disk, laid out as the site serves it
/// (`<root>/content/site.json`, ...).
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a content path to a file under the root, refusing anything that
    /// would climb out of it.
    pub fn file_for(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || relative.as_os_str().is_empty() {
            return Err(Error::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let file = self.file_for(path)?;
        match tokio::fs::read(&file).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::Load {
                path: path.to_string(),
                reason: "not found".to_string(),
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

// ---------------------------------------------------------------------------
// In memory
// ---------------------------------------------------------------------------

/// Content held in memory, keyed by content path. Used by tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, builder style.
    pub fn with(mut self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&mut self, path: &str, body: impl Into<Vec<u8>>) {
        let _ = self.documents.insert(path.to_string(), body.into());
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| Error::Load {
                path: path.to_string(),
                reason: "not found".to_string(),
            })
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.documents.len())
    }
}
