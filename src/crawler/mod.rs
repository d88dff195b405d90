//! Crawler module for fetching and extracting search results
//!
//! This module contains the core extraction pipeline, including:
//! - HTTP fetching with soft failures
//! - Pagination resolution on the first listing page
//! - Detail-link discovery on listing pages
//! - Structured extraction from detail pages
//! - Overall search coordination

mod coordinator;
mod detail;
mod fetcher;
mod listing;
mod pagination;
mod parser;

pub use coordinator::SearchService;
pub use detail::extract_item;
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use listing::extract_detail_links;
pub use pagination::{effective_page, resolve_page_count};
