//! Blog post documents.

use serde::{Deserialize, Serialize};

/// A blog post as stored in the document collection.
///
/// Posts are created and edited out of band; this system only reads them.
/// The `slug` is unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique routing key.
    pub slug: String,

    /// Display title.
    pub title: String,

    /// Short summary shown in lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication date, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Ordered tags. `None` when the document has no `tags` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Markdown body.
    pub content: String,
}

impl Post {
    /// Creates a post with only the required fields set.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: None,
            date: None,
            tags: None,
            content: content.into(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the display date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the tags.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the tags when the field exists and is non-empty.
    pub fn visible_tags(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|tags| !tags.is_empty())
    }

    /// Projects this post to the fields used by list views.
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

/// List projection of a [`Post`]: everything but the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PostSummary {
    /// Returns the description, or an empty string when absent.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        post.summary()
    }
}
