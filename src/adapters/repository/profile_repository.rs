//! Key/value backed ProfileRepository.

use async_trait::async_trait;
use std::sync::Arc;

use super::json_value::{read_json, write_json};
use crate::domain::{foundation::DomainError, quiz::QuizResponseSet, skin::SkinProfile};
use crate::ports::{KeyValueStore, ProfileRepository, StateKey};

/// Stores the profile under `skin-profile` and answers under `quiz-answers`.
#[derive(Clone)]
pub struct KeyValueProfileRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueProfileRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepository for KeyValueProfileRepository {
    async fn current(&self) -> Result<Option<SkinProfile>, DomainError> {
        read_json(self.store.as_ref(), StateKey::SkinProfile).await
    }

    async fn save(&self, profile: &SkinProfile) -> Result<(), DomainError> {
        write_json(self.store.as_ref(), StateKey::SkinProfile, profile).await
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.store.remove(StateKey::SkinProfile.as_str()).await?;
        self.store.remove(StateKey::QuizAnswers.as_str()).await?;
        Ok(())
    }

    async fn last_answers(&self) -> Result<Option<QuizResponseSet>, DomainError> {
        read_json(self.store.as_ref(), StateKey::QuizAnswers).await
    }

    async fn save_answers(&self, answers: &QuizResponseSet) -> Result<(), DomainError> {
        write_json(self.store.as_ref(), StateKey::QuizAnswers, answers).await
    }
}
