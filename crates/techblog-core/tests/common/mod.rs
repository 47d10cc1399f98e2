#![allow(dead_code)]
use techblog_core::Post;

/// Helper to parse a Post from a JSON string slice.
/// Panics if the JSON is invalid (intended for tests).
pub fn post_from_json(json: &str) -> Post {
    serde_json::from_str(json).expect("Failed to create test post from JSON")
}

/// Returns the two-post fixture used across scenarios.
pub fn intro_posts() -> Vec<Post> {
    vec![
        Post::new("intro", "Intro to Systems", "# Intro"),
        Post::new("adv-intro", "Advanced", "# Advanced"),
    ]
}
