//! Cursor extraction from a `Link`-style pagination header.
//!
//! Shopify conveys the next-page cursor as a `page_info` query parameter
//! inside the `Link` response header:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2024-07/products.json?limit=250&page_info=CURSOR>; rel="next"
//! ```
//!
//! A header may carry both a `rel="previous"` and a `rel="next"` directive,
//! comma-separated. Extraction fails open: any malformed or missing piece is
//! reported as "no next page" rather than an error, so a bad header ends
//! pagination instead of aborting the run.

/// Extracts the `page_info` cursor for the next page from a `Link` header
/// value, if one is present.
///
/// Returns `None` when the header is absent, has no `rel="next"` directive,
/// or the next-page URL carries no non-empty `page_info` parameter.
#[must_use]
pub fn next_page_cursor(link_header: Option<&str>) -> Option<String> {
    let header = link_header?;

    for directive in header.split(',') {
        if !directive.contains(r#"rel="next""#) {
            continue;
        }
        return cursor_from_directive(directive);
    }

    None
}

/// Pulls the `page_info` value out of one link directive.
///
/// The cursor runs from just after the `page_info=` marker up to the next
/// query-parameter separator or the closing `>` of the URL. Cursors are
/// base64url-encoded, so no percent-decoding is needed.
fn cursor_from_directive(directive: &str) -> Option<String> {
    const MARKER: &str = "page_info=";

    let start = directive.find(MARKER)? + MARKER.len();
    let tail = directive.get(start..)?;
    let end = tail
        .find(|c: char| c == '&' || c == '>')
        .unwrap_or(tail.len());
    let cursor = &tail[..end];

    if cursor.is_empty() {
        None
    } else {
        Some(cursor.to_owned())
    }
}
