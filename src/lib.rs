//! Nex-Harvest: a music search extraction service
//!
//! This crate queries a third-party music site, follows the posts on its
//! search listing to their detail pages and extracts titles, cover images
//! and download links into a JSON document served over HTTP.

pub mod config;
pub mod crawler;
pub mod models;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for Nex-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors that end a search request
#[derive(Debug, Error)]
pub enum SearchError {
    /// The first listing page could not be fetched
    #[error("Failed to fetch search results from {url}")]
    FetchFailed { url: String },

    /// Nothing survived extraction
    #[error("No results found")]
    NotFound,
}

/// Search parameters rejected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Query parameter 'q' must contain at least 1 character")]
    EmptyQuery,

    #[error("Query parameter 'page' must be between {min} and {max}, got {got}")]
    PageOutOfRange { got: i64, min: u32, max: u32 },
}

// Re-export commonly used types
pub use config::Config;
pub use crawler::SearchService;
pub use models::{DownloadLink, MusicItem, SearchEnvelope, SearchRequest};
