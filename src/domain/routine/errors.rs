//! Routine-specific error types.
//!
//! # Mapping
//!
//! | Error | Code |
//! |-------|------|
//! | Duplicate | DuplicateRoutineItem |
//! | NotInRoutine | RoutineItemNotFound |

use thiserror::Error;

use super::RoutinePeriod;
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutineError {
    /// The product is already part of the routine. Recoverable.
    #[error("Product {product_id} is already in the {period} routine")]
    Duplicate {
        period: RoutinePeriod,
        product_id: ProductId,
    },

    #[error("Product {product_id} is not in the {period} routine")]
    NotInRoutine {
        period: RoutinePeriod,
        product_id: ProductId,
    },
}

impl From<RoutineError> for DomainError {
    fn from(err: RoutineError) -> Self {
        let (code, period, product_id) = match &err {
            RoutineError::Duplicate { period, product_id } => {
                (ErrorCode::DuplicateRoutineItem, period, product_id)
            }
            RoutineError::NotInRoutine { period, product_id } => {
                (ErrorCode::RoutineItemNotFound, period, product_id)
            }
        };
        DomainError::new(code, err.to_string())
            .with_detail("routine", period.to_string())
            .with_detail("product_id", product_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_converts_to_duplicate_code() {
        let err: DomainError = RoutineError::Duplicate {
            period: RoutinePeriod::Morning,
            product_id: ProductId::new("p1").unwrap(),
        }
        .into();
        assert!(err.is_duplicate());
        assert_eq!(err.details.get("routine"), Some(&"morning".to_string()));
        assert!(err.message().contains("already in the morning routine"));
    }

    #[test]
    fn missing_item_converts_to_not_found() {
        let err: DomainError = RoutineError::NotInRoutine {
            period: RoutinePeriod::Evening,
            product_id: ProductId::new("p1").unwrap(),
        }
        .into();
        assert!(err.is_not_found());
    }
}
