//! Main-region view selection.
//!
//! The view is re-derived from the address on every request; nothing is
//! remembered between requests.

use std::sync::Arc;

use techblog_core::{Post, PostSummary, Slug};

use crate::cache::CacheError;
use crate::queries::PostQueries;

/// Which view the address asks for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// No slug: the list of posts.
    #[default]
    List,
    /// A slug: that post's detail view.
    Detail(Slug),
}

impl View {
    /// Derives the view from the `slug` address parameter.
    ///
    /// # Example
    ///
    /// ```
    /// use techblog_server::view::View;
    ///
    /// assert_eq!(View::from_slug(None), View::List);
    /// assert_eq!(View::from_slug(Some("")), View::List);
    /// assert!(matches!(View::from_slug(Some("intro")), View::Detail(_)));
    /// ```
    pub fn from_slug(slug: Option<&str>) -> Self {
        match Slug::parse(slug) {
            Some(slug) => Self::Detail(slug),
            None => Self::List,
        }
    }

    /// Runs the query this view needs and returns what the main region
    /// should show. `posts` is the list already fetched for the sidebar.
    pub async fn resolve(
        self,
        queries: &PostQueries,
        posts: Arc<Vec<PostSummary>>,
    ) -> Result<MainContent, CacheError> {
        match self {
            Self::List => Ok(MainContent::List(posts)),
            Self::Detail(slug) => match queries.get_post(slug.as_str()).await? {
                Some(post) => Ok(MainContent::Detail(post)),
                None => Ok(MainContent::NotFound(slug)),
            },
        }
    }
}

/// Resolved contents of the main region.
#[derive(Debug, Clone)]
pub enum MainContent {
    /// Summaries of the listed posts.
    List(Arc<Vec<PostSummary>>),
    /// One full post.
    Detail(Arc<Post>),
    /// The requested slug matched nothing. Terminal for the main region.
    NotFound(Slug),
}

impl MainContent {
    /// Returns true for the terminal not-found state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
