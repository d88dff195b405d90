//! Search coordinator - orchestrates one search request
//!
//! A search runs these stages strictly in order:
//! - fetch the first listing page (fatal on failure)
//! - resolve the page count and clamp the requested page
//! - fetch the target listing page and discover detail links
//! - fetch and extract every detail page
//! - wrap the items into the response envelope

use crate::config::SiteConfig;
use crate::crawler::detail::extract_item;
use crate::crawler::listing::extract_detail_links;
use crate::crawler::pagination::{effective_page, resolve_page_count};
use crate::crawler::{build_http_client, fetch_url};
use crate::models::{MusicItem, SearchEnvelope};
use crate::url::{format_query, page_url, resolve_link, search_url};
use crate::{HarvestError, SearchError};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use url::Url;

/// Runs searches against the configured music site
///
/// Holds only the shared HTTP client and immutable configuration; every
/// search keeps its own state.
#[derive(Debug, Clone)]
pub struct SearchService {
    client: Client,
    config: SiteConfig,
    base_url: Url,
}

impl SearchService {
    /// Creates a search service with its own HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(SearchService)` - Ready to search
    /// * `Err(HarvestError)` - The base URL is invalid or the client failed to build
    pub fn new(config: SiteConfig) -> Result<Self, HarvestError> {
        let client = build_http_client(&config)?;
        Self::with_client(client, config)
    }

    /// Creates a search service around an existing client
    pub fn with_client(client: Client, config: SiteConfig) -> Result<Self, HarvestError> {
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Site configuration this service searches with
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Searches the site and extracts every item on the requested page
    ///
    /// The requested page is clamped to the number of pages the site
    /// reports, so asking past the end returns the last page.
    ///
    /// # Returns
    ///
    /// * `Ok(envelopes)` - Exactly one envelope holding the extracted items
    /// * `Err(SearchError::FetchFailed)` - The first listing page could not be fetched
    /// * `Err(SearchError::NotFound)` - No item survived fetching and extraction
    pub async fn search(
        &self,
        query: &str,
        requested_page: u32,
    ) -> Result<Vec<SearchEnvelope>, SearchError> {
        let formatted_query = format_query(query);
        let first_url = search_url(&self.config.base_url, &formatted_query);

        tracing::info!("Searching for '{}' (page {})", query, requested_page);

        let Some(first_page) = fetch_url(&self.client, &first_url).await.into_body() else {
            tracing::error!("Search failed, could not fetch {}", first_url);
            return Err(SearchError::FetchFailed { url: first_url });
        };

        let total_pages = resolve_page_count(&first_page);
        let target_page = effective_page(requested_page, total_pages);
        tracing::debug!(
            "Search reports {} page(s), fetching page {}",
            total_pages,
            target_page
        );

        // Only the clamped page is fetched; aggregating several pages would
        // extend this list.
        let target_urls = [page_url(&self.config.base_url, target_page, &formatted_query)];

        let mut envelopes = Vec::new();
        for listing_url in target_urls {
            let Some(listing) = fetch_url(&self.client, &listing_url).await.into_body() else {
                continue;
            };

            let detail_links = extract_detail_links(&listing);
            if detail_links.is_empty() {
                tracing::info!("No posts found on {}", listing_url);
                continue;
            }

            let items = self.fetch_items(&detail_links).await;
            tracing::info!(
                "Extracted {} of {} item(s) from {}",
                items.len(),
                detail_links.len(),
                listing_url
            );

            if !items.is_empty() {
                envelopes.push(SearchEnvelope::new(total_pages, items));
            }
        }

        if envelopes.is_empty() {
            return Err(SearchError::NotFound);
        }

        Ok(envelopes)
    }

    /// Fetches and extracts detail pages, preserving link order
    ///
    /// Up to `max_concurrent_details` pages are in flight at once. Links that
    /// fail to resolve, fetch or extract are dropped.
    pub async fn fetch_items(&self, detail_links: &[String]) -> Vec<MusicItem> {
        let concurrency = self.config.max_concurrent_details.max(1);

        // Links must be owned: a stream over `&String` is not `Send` inside
        // an axum handler.
        stream::iter(detail_links.to_vec())
            .map(|link| async move { self.fetch_item(&link).await })
            .buffered(concurrency)
            .filter_map(|item| async move { item })
            .collect()
            .await
    }

    /// Fetches one detail page and extracts its item
    async fn fetch_item(&self, link: &str) -> Option<MusicItem> {
        let Some(url) = resolve_link(link, &self.base_url) else {
            tracing::debug!("Skipping unfetchable detail link '{}'", link);
            return None;
        };

        let body = fetch_url(&self.client, &url).await.into_body()?;

        let item = extract_item(&body);
        if item.is_none() {
            tracing::debug!("No post container found on {}", url);
        }
        item
    }
}
