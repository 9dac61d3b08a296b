//! ProfileRepository port for the single active skin profile slot

use async_trait::async_trait;

use crate::domain::{
    foundation::DomainError,
    quiz::QuizResponseSet,
    skin::SkinProfile,
};

/// Typed access to the stored skin profile and the answers behind it.
///
/// There is one profile slot per store; saving replaces whatever was there.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Current profile, `None` if absent or unreadable
    async fn current(&self) -> Result<Option<SkinProfile>, DomainError>;

    /// Replace the stored profile
    async fn save(&self, profile: &SkinProfile) -> Result<(), DomainError>;

    /// Drop the stored profile and its answers
    async fn clear(&self) -> Result<(), DomainError>;

    /// Answers submitted with the latest prediction
    async fn last_answers(&self) -> Result<Option<QuizResponseSet>, DomainError>;

    /// Replace the stored answers
    async fn save_answers(&self, answers: &QuizResponseSet) -> Result<(), DomainError>;
}
