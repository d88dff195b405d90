//! Detail-link discovery on search listing pages

use crate::crawler::parser::{first_descendant, parse_selector, POST_SELECTOR};
use scraper::Html;

/// Extracts the detail-page links of every post on a listing page
///
/// Each post container links to its detail page through the anchor in its
/// heading. Posts without a heading, an anchor or a non-empty `href` are
/// skipped. Links are returned in document order, exactly as written in
/// the markup.
///
/// # Example
///
/// ```
/// use nex_harvest::crawler::extract_detail_links;
///
/// let html = r#"<div class="post anm"><h2><a href="https://example.com/a/">A</a></h2></div>"#;
/// assert_eq!(extract_detail_links(html), vec!["https://example.com/a/"]);
/// ```
pub fn extract_detail_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Some(post_selector) = parse_selector(POST_SELECTOR) else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for post in document.select(&post_selector) {
        let href = first_descendant(post, "h2")
            .and_then(|heading| first_descendant(heading, "a"))
            .and_then(|anchor| anchor.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty());

        match href {
            Some(href) => links.push(href.to_string()),
            None => tracing::debug!("Skipping post without a detail link"),
        }
    }

    links
}
