//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## State Ports
//!
//! - `KeyValueStore` - Raw durable key/value storage
//! - `ProfileRepository` - Typed access to the skin profile slot
//! - `RoutineRepository` - Typed access to morning/evening routines
//!
//! ## Feed Ports
//!
//! - `CatalogProvider` - Product catalog
//! - `QuestionBank` - Quiz schema and skin-type reference table
//!
//! ## Service Port
//!
//! - `SkincareService` - Core-facing contract, local or remote

mod catalog_provider;
mod key_value_store;
mod profile_repository;
mod routine_repository;
mod skincare_service;

pub use catalog_provider::{CatalogError, CatalogProvider, QuestionBank};
pub use key_value_store::{KeyValueStore, StateKey, StorageError};
pub use profile_repository::ProfileRepository;
pub use routine_repository::RoutineRepository;
pub use skincare_service::{SkincareService, DEFAULT_TOP_N};
