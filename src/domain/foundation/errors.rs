//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when input fails boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Missing answer for question '{question_id}'")]
    MissingAnswer { question_id: String },

    #[error("Unknown question '{question_id}'")]
    UnknownQuestion { question_id: String },

    #[error("Invalid answer for question '{question_id}': {reason}")]
    InvalidAnswer { question_id: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_answer(question_id: impl Into<String>) -> Self {
        ValidationError::MissingAnswer {
            question_id: question_id.into(),
        }
    }

    pub fn unknown_question(question_id: impl Into<String>) -> Self {
        ValidationError::UnknownQuestion {
            question_id: question_id.into(),
        }
    }

    pub fn invalid_answer(question_id: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidAnswer {
            question_id: question_id.into(),
            reason: reason.into(),
        }
    }

    /// The error code this validation failure surfaces as.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingAnswer { .. } => ErrorCode::MissingAnswer,
            ValidationError::UnknownQuestion { .. } => ErrorCode::UnknownQuestion,
            ValidationError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            _ => ErrorCode::ValidationFailed,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    MissingAnswer,
    UnknownQuestion,
    InvalidAnswer,

    // Not found errors
    ProductNotFound,
    RoutineItemNotFound,

    // Conflict errors
    DuplicateRoutineItem,

    // Infrastructure errors
    StorageError,
    CatalogUnavailable,
    InternalError,
}

impl ErrorCode {
    /// Returns true for codes in the validation category.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationFailed
                | ErrorCode::MissingAnswer
                | ErrorCode::UnknownQuestion
                | ErrorCode::InvalidAnswer
        )
    }

    /// Returns true for codes in the not-found category.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::ProductNotFound | ErrorCode::RoutineItemNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MissingAnswer => "MISSING_ANSWER",
            ErrorCode::UnknownQuestion => "UNKNOWN_QUESTION",
            ErrorCode::InvalidAnswer => "INVALID_ANSWER",
            ErrorCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ErrorCode::RoutineItemNotFound => "ROUTINE_ITEM_NOT_FOUND",
            ErrorCode::DuplicateRoutineItem => "DUPLICATE_ROUTINE_ITEM",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a not-found error for an unknown product.
    pub fn product_not_found(product_id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ProductNotFound,
            format!("Product not found: {}", product_id),
        )
        .with_detail("product_id", product_id.to_string())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_validation(&self) -> bool {
        self.code.is_validation()
    }

    pub fn is_not_found(&self) -> bool {
        self.code.is_not_found()
    }

    pub fn is_duplicate(&self) -> bool {
        self.code == ErrorCode::DuplicateRoutineItem
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("product_id");
        assert_eq!(format!("{}", err), "Field 'product_id' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("top_n", 1, 50, 0);
        assert_eq!(
            format!("{}", err),
            "Field 'top_n' must be between 1 and 50, got 0"
        );
    }

    #[test]
    fn missing_answer_maps_to_its_own_code() {
        let err: DomainError = ValidationError::missing_answer("q1").into();
        assert_eq!(err.code(), ErrorCode::MissingAnswer);
        assert!(err.is_validation());
        assert!(err.message().contains("q1"));
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ProductNotFound, "Product not found");
        assert_eq!(format!("{}", err), "[PRODUCT_NOT_FOUND] Product not found");
    }

    #[test]
    fn product_not_found_carries_id_detail() {
        let err = DomainError::product_not_found("p-404");
        assert!(err.is_not_found());
        assert_eq!(err.details.get("product_id"), Some(&"p-404".to_string()));
    }

    #[test]
    fn duplicate_code_is_neither_validation_nor_not_found() {
        let err = DomainError::new(ErrorCode::DuplicateRoutineItem, "dup");
        assert!(err.is_duplicate());
        assert!(!err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::StorageError), "STORAGE_ERROR");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
