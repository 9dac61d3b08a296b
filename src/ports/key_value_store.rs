//! KeyValueStore Port - durable key-scoped client state.
//!
//! This is the raw storage seam. Callers outside the adapters layer use the
//! typed [`ProfileRepository`](super::ProfileRepository) and
//! [`RoutineRepository`](super::RoutineRepository) instead.

use async_trait::async_trait;
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::routine::RoutinePeriod;

/// Errors that can occur during raw storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize value for '{key}': {reason}")]
    SerializationFailed { key: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Keys under which client state is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    SkinProfile,
    QuizAnswers,
    Routine(RoutinePeriod),
    CombinedRoutine,
}

impl StateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::SkinProfile => "skin-profile",
            StateKey::QuizAnswers => "quiz-answers",
            StateKey::Routine(RoutinePeriod::Morning) => "routine-morning",
            StateKey::Routine(RoutinePeriod::Evening) => "routine-evening",
            StateKey::CombinedRoutine => "legacy-combined-routine",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for durable string values addressed by key.
///
/// Writes must be visible to every later read on the same store instance.
/// Concurrent writes to one key are last-write-wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never written or was removed.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_keys_match_persisted_names() {
        assert_eq!(StateKey::SkinProfile.as_str(), "skin-profile");
        assert_eq!(StateKey::Routine(RoutinePeriod::Morning).as_str(), "routine-morning");
        assert_eq!(StateKey::Routine(RoutinePeriod::Evening).as_str(), "routine-evening");
        assert_eq!(StateKey::CombinedRoutine.as_str(), "legacy-combined-routine");
    }

    #[test]
    fn storage_error_converts_to_storage_code() {
        let err: DomainError = StorageError::IoError("disk full".to_string()).into();
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(err.message().contains("disk full"));
    }
}
