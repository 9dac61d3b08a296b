//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `quiz` - Question schema and validated answer sets
//! - `skin` - Skin types, profiles and the inference engine
//! - `catalog` - Products and browsing filters
//! - `ingredients` - Interaction rules and conflict analysis
//! - `recommendation` - Similarity scoring and ranking
//! - `routine` - Morning/evening routine aggregate
//!
//! Nothing in this layer performs I/O.

pub mod catalog;
pub mod foundation;
pub mod ingredients;
pub mod quiz;
pub mod recommendation;
pub mod routine;
pub mod skin;
