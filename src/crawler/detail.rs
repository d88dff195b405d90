//! Structured extraction from music detail pages
//!
//! A detail page looks roughly like this:
//!
//! ```text
//! div.post.anm
//! ├── div.pcontent          title block, pruned before link scanning
//! │   └── div
//! │       ├── h1            title
//! │       └── img[data-src] cover (lazy loaded)
//! ├── h2                    post heading, pruned
//! └── a[href]               download entries
//!     └── div
//!         ├── div
//!         └── div > span    quality label
//! ```

use crate::crawler::parser::{
    descendants_by_tag, element_text, first_descendant, is_within, parse_selector,
    CONTENT_SELECTOR, POST_SELECTOR,
};
use crate::models::{DownloadLink, MusicItem, NO_TITLE};
use scraper::{ElementRef, Html};

/// Extracts title, cover image and download links from a detail page
///
/// Returns `None` when the page has no post container, no content wrapper
/// inside it, or no block inside the wrapper. Otherwise an item is always
/// produced, even if it carries no links.
///
/// Anchors with a `rel` attribute are navigation (tags, categories,
/// bookmarks) and never become download links.
pub fn extract_item(html: &str) -> Option<MusicItem> {
    let document = Html::parse_document(html);
    let post_selector = parse_selector(POST_SELECTOR)?;
    let content_selector = parse_selector(CONTENT_SELECTOR)?;

    let container = document.select(&post_selector).next()?;
    let content = container.select(&content_selector).next()?;
    let block = first_descendant(content, "div")?;

    let title = first_descendant(block, "h1")
        .map(element_text)
        .unwrap_or_else(|| NO_TITLE.to_string());

    let image = first_descendant(block, "img")
        .and_then(|img| img.value().attr("data-src"))
        .map(str::to_string);

    // The heading is looked up after the content wrapper is set aside, so an
    // h2 inside the wrapper does not count.
    let heading = descendants_by_tag(container, "h2")
        .into_iter()
        .find(|h2| !is_within(*h2, content));

    let links = descendants_by_tag(container, "a")
        .into_iter()
        .filter(|anchor| !is_within(*anchor, content))
        .filter(|anchor| heading.map_or(true, |h2| !is_within(*anchor, h2)))
        .filter(|anchor| anchor.value().attr("rel").is_none())
        .map(download_link)
        .collect();

    Some(MusicItem {
        title,
        image,
        links,
    })
}

/// Builds one download entry from an anchor
fn download_link(anchor: ElementRef<'_>) -> DownloadLink {
    let quality = first_descendant(anchor, "div")
        .map(|wrapper| descendants_by_tag(wrapper, "div"))
        .and_then(|divs| divs.get(1).copied())
        .and_then(|label| first_descendant(label, "span"))
        .map(element_text)
        .unwrap_or_default();

    DownloadLink {
        url: anchor.value().attr("href").map(str::to_string),
        quality,
    }
}
