//! Catalog and question bank ports - externally supplied, read-only feeds.

use async_trait::async_trait;

use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::quiz::QuizQuestion;
use crate::domain::skin::SkinTypeInfo;

/// Errors raised while reading a feed
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read feed '{source_name}': {reason}")]
    ReadFailed { source_name: String, reason: String },

    #[error("Failed to parse feed '{source_name}': {reason}")]
    ParseFailed { source_name: String, reason: String },

    #[error("Feed '{source_name}' is invalid: {reason}")]
    Invalid { source_name: String, reason: String },
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogUnavailable, err.to_string())
    }
}

/// Supplies the product catalog in its canonical order.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Supplies the ordered quiz schema and the skin-type reference table.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    async fn questions(&self) -> Result<Vec<QuizQuestion>, CatalogError>;

    async fn skin_types(&self) -> Result<Vec<SkinTypeInfo>, CatalogError>;
}
