//! HTTP fetcher implementation
//!
//! This module handles all outbound requests to the music site:
//! - Building the HTTP client with the browser identity and timeout
//! - GET requests for listing and detail pages
//! - Classifying failures without ever raising them to the caller

use crate::config::SiteConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Consumes the result, keeping only the body of a successful fetch
    pub fn into_body(self) -> Option<String> {
        match self {
            Self::Success { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The target site configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use nex_harvest::config::SiteConfig;
/// use nex_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&SiteConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SiteConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, converting every failure into a `FetchResult` variant
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx with readable body | Success |
/// | Any other HTTP status | HttpError |
/// | Timeout | NetworkError |
/// | Connection failure | NetworkError |
/// | Body read failure | NetworkError |
///
/// Failures are logged here so callers only decide whether to skip or abort.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let result = match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                FetchResult::HttpError {
                    status_code: status.as_u16(),
                }
            } else {
                match response.text().await {
                    Ok(body) => FetchResult::Success {
                        final_url,
                        status_code: status.as_u16(),
                        body,
                    },
                    Err(e) => FetchResult::NetworkError {
                        error: e.to_string(),
                    },
                }
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: format!("Connection failed: {}", e),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    };

    match &result {
        FetchResult::Success {
            final_url,
            status_code,
            body,
        } => {
            tracing::debug!(
                "Fetched {} ({} bytes, status {}, final url {})",
                url,
                body.len(),
                status_code,
                final_url
            );
        }
        FetchResult::HttpError { status_code } => {
            tracing::warn!("Error fetching {}: HTTP status {}", url, status_code);
        }
        FetchResult::NetworkError { error } => {
            tracing::warn!("Error fetching {}: {}", url, error);
        }
    }

    result
}
