//! Newtypes for addressing and filtering posts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, human-readable post identifier.
///
/// Slugs are compared exactly: no case folding, no trimming.
///
/// # Example
///
/// ```
/// use techblog_core::Slug;
///
/// assert!(Slug::parse(Some("")).is_none());
/// assert_eq!(Slug::parse(Some("intro")).unwrap().as_str(), "intro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Creates a slug from a raw value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parses an optional address value. Absent and empty values yield `None`.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(Self::new)
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A search term typed into the sidebar.
///
/// Matches a field when the term is a case-insensitive substring of it.
/// No tokenization or ranking is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Parses an optional input value. Absent and empty values yield `None`,
    /// which means "no filter".
    pub fn parse(value: Option<&str>) -> Option<Self> {
        value.filter(|v| !v.is_empty()).map(|v| Self(v.to_string()))
    }

    /// Returns the raw term.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when `haystack` contains this term, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
