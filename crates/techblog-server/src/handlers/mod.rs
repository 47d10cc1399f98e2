//! HTTP handlers.

pub mod api;
pub mod health;
pub mod metrics;
pub mod page;
