//! Response data types
//!
//! Field names match the JSON published by the service, including the
//! `total pages` key with its embedded space.

use crate::RequestError;
use serde::{Deserialize, Serialize};

/// Channel identifier carried in every envelope
pub const CHANNEL: &str = "@tss_apis";

/// Author identifier carried in every envelope
pub const PROGRAMER: &str = "tss";

/// Rubika account carried in every envelope
pub const ID_RUBIKA: &str = "@tss_dev";

/// Title used when a detail page has no heading
pub const NO_TITLE: &str = "No Title";

/// Lowest listing page a caller may request
pub const MIN_PAGE: u32 = 1;

/// Highest listing page a caller may request
pub const MAX_PAGE: u32 = 5;

/// Listing page searched when the caller does not ask for one
pub const DEFAULT_PAGE: u32 = 2;

/// A validated search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
}

impl SearchRequest {
    /// Validates raw search parameters
    ///
    /// The query must be non-empty and the page, when given, must lie in
    /// `MIN_PAGE..=MAX_PAGE`. A missing page defaults to `DEFAULT_PAGE`.
    pub fn new(query: impl Into<String>, page: Option<i64>) -> Result<Self, RequestError> {
        let query = query.into();
        if query.is_empty() {
            return Err(RequestError::EmptyQuery);
        }

        let page = match page {
            None => DEFAULT_PAGE,
            Some(page) => u32::try_from(page)
                .ok()
                .filter(|page| (MIN_PAGE..=MAX_PAGE).contains(page))
                .ok_or(RequestError::PageOutOfRange {
                    got: page,
                    min: MIN_PAGE,
                    max: MAX_PAGE,
                })?,
        };

        Ok(Self { query, page })
    }
}

/// One download option on a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub url: Option<String>,
    /// Quality label such as "320"; empty when the anchor has no label
    pub quality: String,
}

/// Metadata extracted from one detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicItem {
    pub title: String,
    pub image: Option<String>,
    pub links: Vec<DownloadLink>,
}

/// Response wrapper around the items of one listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub channel: String,
    pub programer: String,
    pub id_rubika: String,
    #[serde(rename = "total pages")]
    pub total_pages: u32,
    pub results: Vec<MusicItem>,
}

impl SearchEnvelope {
    /// Wraps extracted items with the fixed channel metadata
    pub fn new(total_pages: u32, results: Vec<MusicItem>) -> Self {
        Self {
            channel: CHANNEL.to_string(),
            programer: PROGRAMER.to_string(),
            id_rubika: ID_RUBIKA.to_string(),
            total_pages,
            results,
        }
    }
}
