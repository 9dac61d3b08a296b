//! GetCurrentProfile - Query handler for the stored skin profile.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::quiz::QuizResponseSet;
use crate::domain::skin::SkinProfile;
use crate::ports::ProfileRepository;

/// Stored profile together with the answers it was predicted from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentProfile {
    pub profile: Option<SkinProfile>,
    pub answers: Option<QuizResponseSet>,
}

pub struct GetCurrentProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetCurrentProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self) -> Result<CurrentProfile, DomainError> {
        Ok(CurrentProfile {
            profile: self.profiles.current().await?,
            answers: self.profiles.last_answers().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::repository::KeyValueProfileRepository;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::foundation::Fraction;
    use crate::domain::skin::SkinType;

    #[tokio::test]
    async fn empty_store_yields_no_profile() {
        let repo = Arc::new(KeyValueProfileRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let current = GetCurrentProfileHandler::new(repo).handle().await.unwrap();
        assert_eq!(
            current,
            CurrentProfile {
                profile: None,
                answers: None
            }
        );
    }

    #[tokio::test]
    async fn returns_saved_profile() {
        let repo = Arc::new(KeyValueProfileRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let profile = SkinProfile::new(SkinType::Combination, Fraction::new(0.9), None);
        repo.save(&profile).await.unwrap();

        let current = GetCurrentProfileHandler::new(repo).handle().await.unwrap();
        assert_eq!(current.profile, Some(profile));
    }
}
