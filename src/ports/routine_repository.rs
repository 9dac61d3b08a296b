//! RoutineRepository port for routine persistence operations

use async_trait::async_trait;

use crate::domain::{
    foundation::DomainError,
    routine::{Routine, RoutinePeriod, RoutineSlot},
};

/// Typed access to the morning and evening routines.
#[async_trait]
pub trait RoutineRepository: Send + Sync {
    /// Load a routine; absent or unreadable state yields an empty routine
    async fn load(&self, period: RoutinePeriod) -> Result<Routine, DomainError>;

    /// Replace the stored routine for `routine.period()` with one write
    async fn save(&self, routine: &Routine) -> Result<(), DomainError>;

    /// Replace the derived combined routine (morning then evening)
    async fn save_combined(&self, slots: &[RoutineSlot]) -> Result<(), DomainError>;

    /// Read the derived combined routine; empty when absent
    async fn load_combined(&self) -> Result<Vec<RoutineSlot>, DomainError>;
}
