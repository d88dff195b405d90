//! URL handling module for Nex-Harvest
//!
//! Builds the search listing URLs of the target site and resolves the
//! detail-page links discovered on a listing.

mod resolve;
mod site;

pub use resolve::resolve_link;
pub use site::{format_query, page_url, search_url};
