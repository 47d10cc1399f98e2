//! Techblog Core - Domain types
//!
//! This crate provides the foundational types shared by the Tech Blogs
//! store and server crates: the [`Post`] document, its list projection
//! [`PostSummary`], and the [`Slug`] and [`SearchTerm`] newtypes used to
//! address and filter posts.
//!
//! # Example
//!
//! ```
//! use techblog_core::{Post, SearchTerm};
//!
//! let post = Post::new("intro", "Intro to Systems", "# Hello");
//! let term = SearchTerm::parse(Some("SYSTEMS")).unwrap();
//!
//! assert!(term.matches(&post.title));
//! assert_eq!(post.summary().slug, "intro");
//! ```

pub mod post;
pub mod types;

pub use post::{Post, PostSummary};
pub use types::{SearchTerm, Slug};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
