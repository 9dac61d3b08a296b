//! ResetProfile - Command handler that forgets the stored profile so the
//! quiz can be retaken.

use std::sync::Arc;

use crate::application::RequestTracker;
use crate::domain::foundation::DomainError;
use crate::ports::ProfileRepository;

pub struct ResetProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
    tracker: Arc<RequestTracker>,
}

impl ResetProfileHandler {
    /// `tracker` must be the one shared with [`super::PredictSkinTypeHandler`].
    pub fn new(profiles: Arc<dyn ProfileRepository>, tracker: Arc<RequestTracker>) -> Self {
        Self { profiles, tracker }
    }

    /// Clears the profile and its answers. Predictions still in flight are
    /// superseded and will not be stored.
    pub async fn handle(&self) -> Result<(), DomainError> {
        let ticket = self.tracker.issue();
        let Some(_commit) = self.tracker.claim(&ticket).await else {
            tracing::debug!(request_id = %ticket.id(), "Reset superseded by a newer prediction");
            return Ok(());
        };

        self.profiles.clear().await?;
        tracing::info!(request_id = %ticket.id(), "Skin profile reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::StaticCatalog;
    use crate::adapters::repository::KeyValueProfileRepository;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::handlers::{PredictSkinTypeCommand, PredictSkinTypeHandler};
    use crate::domain::foundation::QuestionId;
    use crate::domain::quiz::{Answer, QuizResponseSet};

    fn responses() -> QuizResponseSet {
        QuizResponseSet::new().with_answer(
            QuestionId::new("q1").unwrap(),
            Answer::Single("comfortable".to_string()),
        )
    }

    #[tokio::test]
    async fn reset_clears_profile_and_answers() {
        let profiles = Arc::new(KeyValueProfileRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let tracker = Arc::new(RequestTracker::new());
        let predict = PredictSkinTypeHandler::new(
            Arc::new(StaticCatalog::builtin().unwrap()),
            profiles.clone(),
            tracker.clone(),
            QuestionId::new("q1").unwrap(),
        );
        predict
            .handle(PredictSkinTypeCommand {
                responses: responses(),
            })
            .await
            .unwrap();

        ResetProfileHandler::new(profiles.clone(), tracker)
            .handle()
            .await
            .unwrap();

        assert!(profiles.current().await.unwrap().is_none());
        assert!(profiles.last_answers().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reset_on_empty_store_is_a_no_op() {
        let profiles = Arc::new(KeyValueProfileRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        ResetProfileHandler::new(profiles.clone(), Arc::new(RequestTracker::new()))
            .handle()
            .await
            .unwrap();
        assert!(profiles.current().await.unwrap().is_none());
    }
}
