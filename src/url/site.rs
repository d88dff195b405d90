//! Search URL construction for the target site

use url::form_urlencoded;

/// Encodes a free-text query for the `s` parameter
///
/// Spaces become `+`; everything outside the unreserved set is
/// percent-encoded so queries containing `&` or `#` stay in the parameter.
pub fn format_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// URL of the first search listing page
///
/// # Example
///
/// ```
/// use nex_harvest::url::search_url;
///
/// assert_eq!(
///     search_url("https://nex1music.com", "hello+world"),
///     "https://nex1music.com/?s=hello+world"
/// );
/// ```
pub fn search_url(base_url: &str, formatted_query: &str) -> String {
    format!("{}/?s={}", base_url.trim_end_matches('/'), formatted_query)
}

/// URL of the numbered search listing page
pub fn page_url(base_url: &str, page: u32, formatted_query: &str) -> String {
    format!(
        "{}/page/{}/?s={}",
        base_url.trim_end_matches('/'),
        page,
        formatted_query
    )
}
