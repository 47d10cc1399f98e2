use serde::Deserialize;

use super::{escape, escape_attr};

/// Credits shown in the page footer.
///
/// Read from the `[credits]` settings table; contact links are optional and
/// rendered only when set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Credits {
    pub author: String,
    pub email: Option<String>,
    /// Full profile URL, e.g. `https://github.com/<user>`.
    pub github: Option<String>,
}

impl Default for Credits {
    fn default() -> Self {
        Self {
            author: "Tech Blogs Team".to_string(),
            email: None,
            github: None,
        }
    }
}

/// Static credits block: author line, then the contact links.
pub fn footer(credits: &Credits) -> String {
    let mut out = format!(
        "<footer>\n<p>Built with ❤️ by <strong>{}</strong></p>\n",
        escape(&credits.author)
    );

    let mut links = Vec::new();
    if let Some(email) = credits.email.as_deref().filter(|e| !e.is_empty()) {
        links.push(format!(
            "📧 <a href=\"mailto:{}\">{}</a>",
            escape_attr(email),
            escape(email)
        ));
    }
    if let Some(github) = credits.github.as_deref().filter(|g| !g.is_empty()) {
        links.push(format!(
            "🐙 <a href=\"{}\" target=\"_blank\" rel=\"noopener\">GitHub</a>",
            escape_attr(github)
        ));
    }
    if !links.is_empty() {
        out.push_str(&format!(
            "<p>{}</p>\n",
            links.join("&nbsp;&nbsp;|&nbsp;&nbsp;")
        ));
    }

    out.push_str("</footer>\n");
    out
}
