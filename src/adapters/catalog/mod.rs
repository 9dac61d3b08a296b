//! Catalog Adapters
//!
//! Read-only product catalog and question bank feeds.

mod static_catalog;

pub use static_catalog::{FeedFormat, FeedSources, StaticCatalog};
