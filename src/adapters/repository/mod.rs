//! Repository Adapters
//!
//! Typed repositories layered over any [`KeyValueStore`](crate::ports::KeyValueStore).
//! Values are stored as JSON. Unreadable values are logged and treated as absent.

mod json_value;
mod profile_repository;
mod routine_repository;

pub use profile_repository::KeyValueProfileRepository;
pub use routine_repository::KeyValueRoutineRepository;
