//! List filters.

use techblog_core::{Post, SearchTerm};

/// Filter applied by [`PostStore::list_posts`](super::PostStore::list_posts).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostFilter {
    /// Every post.
    All,
    /// Posts whose title or slug contains the term, ignoring case.
    Search(SearchTerm),
}

impl PostFilter {
    /// Builds a filter from an optional search input.
    ///
    /// # Example
    ///
    /// ```
    /// use techblog_store::PostFilter;
    ///
    /// assert_eq!(PostFilter::from_input(Some("")), PostFilter::All);
    /// assert!(matches!(PostFilter::from_input(Some("raft")), PostFilter::Search(_)));
    /// ```
    pub fn from_input(input: Option<&str>) -> Self {
        match SearchTerm::parse(input) {
            Some(term) => Self::Search(term),
            None => Self::All,
        }
    }

    /// Returns the search term, if any.
    pub fn term(&self) -> Option<&SearchTerm> {
        match self {
            Self::All => None,
            Self::Search(term) => Some(term),
        }
    }

    /// Returns the store pattern for the term: the term with every regex
    /// metacharacter escaped, so it always matches literally.
    pub fn pattern(&self) -> Option<String> {
        self.term().map(|term| regex::escape(term.as_str()))
    }

    /// Returns true when `post` passes this filter.
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Search(term) => term.matches(&post.title) || term.matches(&post.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_escaped() {
        let filter = PostFilter::from_input(Some("c++ (part 1)"));
        assert_eq!(filter.pattern().unwrap(), r"c\+\+ \(part 1\)");
        assert!(PostFilter::All.pattern().is_none());
    }

    #[test]
    fn test_escaped_pattern_matches_literally() {
        let pattern = PostFilter::from_input(Some("a.b")).pattern().unwrap();
        let re = regex::RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .unwrap();

        assert!(re.is_match("A.B notes"));
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn test_matches_title_or_slug() {
        let filter = PostFilter::from_input(Some("intro"));

        assert!(filter.matches(&Post::new("intro", "Intro to Systems", "")));
        assert!(filter.matches(&Post::new("adv-intro", "Advanced", "")));
        assert!(!filter.matches(&Post::new("raft", "Raft", "")));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(PostFilter::All.matches(&Post::new("x", "Y", "")));
        assert!(PostFilter::from_input(None).term().is_none());
    }
}
