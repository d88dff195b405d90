//! Total page count of a search listing

use crate::crawler::parser::{
    element_text, parse_selector, PAGE_NUMBER_SELECTOR, PAGINATION_SELECTOR,
};
use scraper::Html;

/// Determines how many listing pages a search has
///
/// The site renders its pagination as `<div class="pn">` followed by
/// `a.page-numbers` controls whose last entry is the "next" arrow, so the
/// second-to-last control carries the number of the last page. This is a
/// fixed convention of the site, not something inferred from the markup.
///
/// Returns 1 when the container is missing, when fewer than two controls
/// exist, or when the control text is not a number. The result never
/// exceeds the number of controls found.
pub fn resolve_page_count(html: &str) -> u32 {
    let document = Html::parse_document(html);

    let (Some(container_selector), Some(control_selector)) = (
        parse_selector(PAGINATION_SELECTOR),
        parse_selector(PAGE_NUMBER_SELECTOR),
    ) else {
        return 1;
    };

    if document.select(&container_selector).next().is_none() {
        tracing::debug!("No pagination container, assuming a single page");
        return 1;
    }

    let controls: Vec<_> = document.select(&control_selector).collect();
    if controls.len() < 2 {
        return 1;
    }

    let text = element_text(controls[controls.len() - 2]);
    match normalize_digits(&text).parse::<i64>() {
        Ok(pages) => {
            let max_pages = u32::try_from(controls.len()).unwrap_or(u32::MAX);
            let pages = u32::try_from(pages.max(1)).unwrap_or(u32::MAX);
            pages.min(max_pages)
        }
        Err(_) => {
            tracing::debug!("Pagination control '{}' is not a page number", text);
            1
        }
    }
}

/// Rewrites Persian and Arabic-Indic digits as ASCII digits
///
/// The site renders page numbers in Persian numerals (`۱ ۲ ۳`).
fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => ascii_digit(c as u32 - 0x06F0),
            '\u{0660}'..='\u{0669}' => ascii_digit(c as u32 - 0x0660),
            _ => c,
        })
        .collect()
}

fn ascii_digit(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}

/// Clamps a requested page into the available range
pub fn effective_page(requested: u32, total_pages: u32) -> u32 {
    requested.min(total_pages).max(1)
}
