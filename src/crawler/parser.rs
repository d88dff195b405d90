//! Markup traversal helpers shared by the page extractors
//!
//! The site markup is matched by CSS class markers through `scraper`
//! selectors and by tag name through plain descendant walks. Tag lookups
//! never match the element they start from.

use scraper::{ElementRef, Selector};

/// Post container on both listing and detail pages
///
/// Class matching, so `class="anm post featured"` is a container too.
pub(crate) const POST_SELECTOR: &str = "div.post.anm";

/// Content wrapper holding the title block of a detail page
pub(crate) const CONTENT_SELECTOR: &str = "div.pcontent";

/// Pagination indicator container
pub(crate) const PAGINATION_SELECTOR: &str = "div.pn";

/// Numbered pagination controls
pub(crate) const PAGE_NUMBER_SELECTOR: &str = "a.page-numbers";

/// Parses one of the constant selectors above
pub(crate) fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::error!("Invalid selector '{}': {:?}", css, e);
            None
        }
    }
}

/// First descendant element with the given tag name, in document order
pub(crate) fn first_descendant<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == tag)
}

/// All descendant elements with the given tag name, in document order
pub(crate) fn descendants_by_tag<'a>(element: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == tag)
        .collect()
}

/// Concatenated text of an element, trimmed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Whether `element` sits inside the subtree rooted at `root`
pub(crate) fn is_within(element: ElementRef<'_>, root: ElementRef<'_>) -> bool {
    element.ancestors().any(|ancestor| ancestor.id() == root.id())
}
