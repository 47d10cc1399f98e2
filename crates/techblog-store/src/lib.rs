//! # Techblog Store
//!
//! Read-only access to the blog post collection.
//!
//! ## Features
//!
//! - Lazily connected, process-wide shared MongoDB client
//! - Async trait-based post store abstraction
//! - Case-insensitive, literal title/slug search
//! - In-memory store for tests and local development
//!
//! ## Example
//!
//! ```ignore
//! use techblog_store::{MongoPostStore, PostFilter, PostStore, StoreClient, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .uri(std::env::var("MONGO_URI")?)
//!     .build()?;
//!
//! let store = MongoPostStore::new(StoreClient::new(config));
//!
//! let posts = store.list_posts(&PostFilter::from_input(Some("raft"))).await?;
//! let post = store.find_post("raft-explained").await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod source;

// Re-exports
pub use client::{ClientHandle, StoreClient};
pub use config::{StoreConfig, StoreConfigBuilder};
pub use error::StoreError;
pub use memory::InMemoryPostStore;
pub use mongo::MongoPostStore;
pub use source::{PostFilter, PostStore};

// Re-export techblog_core for consumers
pub use techblog_core;
