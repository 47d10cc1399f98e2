//! Post store abstraction.
//!
//! This module defines the core trait for post stores and the list filter.

mod filter;
mod traits;

pub use filter::PostFilter;
pub use traits::PostStore;
