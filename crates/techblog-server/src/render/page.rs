use techblog_core::PostSummary;

use super::credits::{Credits, footer};
use super::fragments::{main_content, sidebar};
use crate::view::MainContent;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #111827; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 300px; padding: 16px; background: #f3f4f6; box-sizing: border-box; }
.sidebar input[type=search] { width: 100%; box-sizing: border-box; padding: 6px; }
.summary { margin-bottom: 20px; }
main { flex: 1; padding: 24px 48px; max-width: 900px; }
a.plain { text-decoration: none; color: inherit; }
.muted { color: #6b7280; font-size: 13px; text-decoration: none; }
.caption { color: #6b7280; font-size: 14px; }
.tag { background: #eef2ff; border-radius: 4px; padding: 2px 6px; }
.error { background: #fee2e2; color: #991b1b; border-radius: 6px; padding: 12px 16px; }
footer { text-align: center; padding: 20px 0; color: #6b7280; font-size: 14px; }
footer p { margin: 5px 0; }
"#;

/// Everything one render pass needs.
#[derive(Debug)]
pub struct PageModel<'a> {
    /// Posts for the sidebar, already filtered by the search term.
    pub posts: &'a [PostSummary],
    /// Current search input.
    pub search: Option<&'a str>,
    /// Current `slug` address parameter.
    pub slug: Option<&'a str>,
    /// Resolved main region.
    pub content: &'a MainContent,
    /// Footer credits.
    pub credits: &'a Credits,
}

/// Renders a full HTML page.
///
/// A NotFound main region holds only the error indicator: no footer.
pub fn page(model: &PageModel<'_>) -> String {
    let credits = if model.content.is_not_found() {
        String::new()
    } else {
        footer(model.credits)
    };

    let body = format!(
        "<div class=\"layout\">\n{}<main>\n{}{}</main>\n</div>\n",
        sidebar(model.posts, model.search, model.slug),
        main_content(model.content),
        credits,
    );
    document(&body)
}

/// Renders the page shown when a render pass fails.
pub fn error_page() -> String {
    document(
        "<main>\n<div class=\"error\" role=\"alert\">Something went wrong while loading posts. \
         Please try again.</div>\n<p><a href=\"/\">← Back to Home</a></p>\n</main>\n",
    )
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Tech Blogs</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        STYLE, body
    )
}
