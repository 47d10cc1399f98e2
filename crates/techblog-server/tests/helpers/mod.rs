//! Test helpers para techblog-server.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod fixtures;

pub use client::{TestClient, TestResponse, client, client_for, client_with_credits};
pub use fixtures::{FailingStore, sample_posts, sample_store};
