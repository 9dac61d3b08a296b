//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Raw key/value stores (file, in-memory)
//! - `repository` - Typed repositories over a key/value store
//! - `catalog` - Product catalog and question bank feeds
//! - `http` - REST API (axum)

pub mod catalog;
pub mod http;
pub mod repository;
pub mod storage;

pub use catalog::{FeedSources, StaticCatalog};
pub use repository::{KeyValueProfileRepository, KeyValueRoutineRepository};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
