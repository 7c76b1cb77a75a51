// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

/// Rendering error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A content document could not be fetched
    #[error("Failed to load {path}: {reason}")]
    Load { path: String, reason: String },

    /// A content document was fetched but is not the expected JSON shape
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Slug is not a URL-safe identifier
    #[error("Invalid property slug: {0:?}")]
    InvalidSlug(String),

    /// Content path escapes the content root
    #[error("Invalid content path: {0}")]
    InvalidPath(String),

    /// Request path does not name one of the site's pages
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Site configuration is not valid YAML for `SiteConfig`
    #[error("Invalid site configuration: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parse
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, Error>;
