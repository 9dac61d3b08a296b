//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the skincare domain.

mod errors;
mod fraction;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fraction::Fraction;
pub use ids::{ProductId, QuestionId, RequestId};
pub use timestamp::Timestamp;
