use techblog_core::{Post, PostSummary};

use super::{escape, escape_attr, post_href, render_markdown};
use crate::view::MainContent;

/// Sidebar: brand link, search form, then one summary per post.
///
/// The search form preserves the current `slug` so searching does not leave
/// the detail view.
pub fn sidebar(posts: &[PostSummary], search: Option<&str>, slug: Option<&str>) -> String {
    let mut out = String::from(
        r#"<aside class="sidebar">
<h3><a class="plain" href="/">📚 Tech Blogs</a></h3>
<form class="search" method="get" action="/">
<label for="q">🔍 Search by title or slug</label>
"#,
    );

    out.push_str(&format!(
        "<input id=\"q\" type=\"search\" name=\"q\" value=\"{}\">\n",
        escape_attr(search.unwrap_or_default())
    ));
    if let Some(slug) = slug.filter(|s| !s.is_empty()) {
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"slug\" value=\"{}\">\n",
            escape_attr(slug)
        ));
    }
    out.push_str("</form>\n<hr>\n");

    for post in posts {
        out.push_str(&summary_fragment(post));
    }

    out.push_str("</aside>\n");
    out
}

/// One sidebar entry: linked title and description (empty when absent).
pub fn summary_fragment(post: &PostSummary) -> String {
    format!(
        "<div class=\"summary\">\n<a class=\"plain\" href=\"{}\"><strong>{}</strong></a><br>\n<span class=\"muted\">{}</span>\n</div>\n",
        escape_attr(&post_href(&post.slug)),
        escape(&post.title),
        escape(post.description_or_empty()),
    )
}

/// Main region for the list view.
pub fn list_content(posts: &[PostSummary]) -> String {
    let mut out = String::from(
        "<h1>👋 Welcome to Tech Blogs</h1>\n\
         <p>Deep dives into distributed systems, databases, and backend engineering.</p>\n",
    );

    for post in posts {
        out.push_str(&format!(
            "<section class=\"entry\">\n<h3>{}</h3>\n<p>{}</p>\n<a href=\"{}\">Read more →</a>\n</section>\n<hr>\n",
            escape(&post.title),
            escape(post.description_or_empty()),
            escape_attr(&post_href(&post.slug)),
        ));
    }

    out
}

/// Main region for the detail view.
///
/// The tag row is rendered only when the post has a non-empty `tags` field.
pub fn detail_content(post: &Post) -> String {
    let mut out = String::from("<a href=\"/\">← Back to Home</a>\n");

    out.push_str(&format!("<h1>{}</h1>\n", escape(&post.title)));
    out.push_str(&format!(
        "<p class=\"caption\">📅 {}</p>\n",
        escape(post.date.as_deref().unwrap_or_default())
    ));

    if let Some(tags) = post.visible_tags() {
        let badges: Vec<String> = tags
            .iter()
            .map(|tag| format!("<code class=\"tag\">{}</code>", escape(tag)))
            .collect();
        out.push_str(&format!("<p class=\"tags\">{}</p>\n", badges.join(" ")));
    }

    out.push_str("<hr>\n<article>\n");
    out.push_str(&render_markdown(&post.content));
    out.push_str("</article>\n<hr>\n");
    out
}

/// Main region when the slug matched nothing. Nothing else is rendered.
pub fn not_found_content() -> String {
    "<div class=\"error\" role=\"alert\">Blog not found</div>\n".to_string()
}

/// Dispatches on the resolved view.
pub fn main_content(content: &MainContent) -> String {
    match content {
        MainContent::List(posts) => list_content(posts),
        MainContent::Detail(post) => detail_content(post),
        MainContent::NotFound(_) => not_found_content(),
    }
}
