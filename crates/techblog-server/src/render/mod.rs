//! HTML rendering.
//!
//! Pure formatting of query results into page fragments. No I/O.
//! Titles, descriptions, dates and tags are escaped; post `content` is
//! trusted Markdown and is rendered without sanitization.

mod credits;
mod fragments;
mod markdown;
mod page;

use std::borrow::Cow;

pub use credits::{Credits, footer};
pub use fragments::{
    detail_content, list_content, main_content, not_found_content, sidebar, summary_fragment,
};
pub use markdown::render_markdown;
pub use page::{PageModel, error_page, page};

/// Escapes text for an HTML text node.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escapes text for a double-quoted HTML attribute.
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Link target that selects a post through the address.
///
/// # Example
///
/// ```
/// use techblog_server::render::post_href;
///
/// assert_eq!(post_href("intro"), "?slug=intro");
/// assert_eq!(post_href("a b&c"), "?slug=a%20b%26c");
/// ```
pub fn post_href(slug: &str) -> String {
    format!("?slug={}", urlencoding::encode(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>R&D</b>"), "&lt;b&gt;R&amp;D&lt;/b&gt;");
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_post_href_encodes_slug() {
        assert_eq!(post_href("intro"), "?slug=intro");
        assert_eq!(post_href("x\"><script>"), "?slug=x%22%3E%3Cscript%3E");
    }
}
