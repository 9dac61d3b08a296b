//! PredictSkinType - Command handler that classifies quiz answers and
//! persists the resulting profile.

use std::sync::Arc;

use crate::application::RequestTracker;
use crate::domain::foundation::{DomainError, QuestionId};
use crate::domain::quiz::QuizResponseSet;
use crate::domain::skin::{SkinProfile, SkinProfileInference};
use crate::ports::{ProfileRepository, QuestionBank};

/// Command carrying a completed set of quiz answers.
#[derive(Debug, Clone)]
pub struct PredictSkinTypeCommand {
    pub responses: QuizResponseSet,
}

/// Handler for skin type prediction.
pub struct PredictSkinTypeHandler {
    question_bank: Arc<dyn QuestionBank>,
    profiles: Arc<dyn ProfileRepository>,
    tracker: Arc<RequestTracker>,
    primary_question: QuestionId,
}

impl PredictSkinTypeHandler {
    pub fn new(
        question_bank: Arc<dyn QuestionBank>,
        profiles: Arc<dyn ProfileRepository>,
        tracker: Arc<RequestTracker>,
        primary_question: QuestionId,
    ) -> Self {
        Self {
            question_bank,
            profiles,
            tracker,
            primary_question,
        }
    }

    /// Validates, classifies and stores the profile.
    ///
    /// The returned profile is always the prediction for `cmd`. It is only
    /// persisted if no newer prediction was started in the meantime. The
    /// staleness check and both writes run under one lock.
    ///
    /// Any value is accepted for the primary question; unmapped values
    /// classify as Combination.
    pub async fn handle(&self, cmd: PredictSkinTypeCommand) -> Result<SkinProfile, DomainError> {
        let ticket = self.tracker.issue();

        let questions = self.question_bank.questions().await?;
        cmd.responses
            .validate_against(&questions, Some(&self.primary_question))?;

        let reference = self.question_bank.skin_types().await?;
        let inference = SkinProfileInference::new(self.primary_question.clone(), reference);
        let profile = inference.predict(&cmd.responses)?;

        let Some(_commit) = self.tracker.claim(&ticket).await else {
            tracing::debug!(
                request_id = %ticket.id(),
                skin_type = %profile.skin_type,
                "Prediction superseded, not persisting"
            );
            return Ok(profile);
        };

        self.profiles.save(&profile).await?;
        self.profiles.save_answers(&cmd.responses).await?;

        tracing::info!(
            request_id = %ticket.id(),
            skin_type = %profile.skin_type,
            confidence = profile.confidence.value(),
            "Skin type predicted"
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::StaticCatalog;
    use crate::adapters::repository::KeyValueProfileRepository;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::quiz::Answer;
    use crate::domain::quiz::QuizQuestion;
    use crate::domain::skin::{SkinType, SkinTypeInfo};
    use crate::ports::CatalogError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s).unwrap()
    }

    fn handler_with(profiles: Arc<dyn ProfileRepository>) -> PredictSkinTypeHandler {
        PredictSkinTypeHandler::new(
            Arc::new(StaticCatalog::builtin().unwrap()),
            profiles,
            Arc::new(RequestTracker::new()),
            qid("q1"),
        )
    }

    fn in_memory_profiles() -> Arc<KeyValueProfileRepository> {
        Arc::new(KeyValueProfileRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )))
    }

    fn answers(primary: &str) -> QuizResponseSet {
        QuizResponseSet::new().with_answer(qid("q1"), Answer::Single(primary.to_string()))
    }

    #[tokio::test]
    async fn prediction_is_persisted_with_description() {
        let profiles = in_memory_profiles();
        let handler = handler_with(profiles.clone());

        let profile = handler
            .handle(PredictSkinTypeCommand {
                responses: answers("oily_shiny"),
            })
            .await
            .unwrap();

        assert_eq!(profile.skin_type, SkinType::Oily);
        assert!(profile.description.is_some());
        assert_eq!(profiles.current().await.unwrap(), Some(profile));
        assert_eq!(profiles.last_answers().await.unwrap(), Some(answers("oily_shiny")));
    }

    #[tokio::test]
    async fn missing_primary_answer_is_rejected_and_nothing_stored() {
        let profiles = in_memory_profiles();
        let handler = handler_with(profiles.clone());
        let responses =
            QuizResponseSet::new().with_answer(qid("q2"), Answer::Single("never".to_string()));

        let err = handler
            .handle(PredictSkinTypeCommand { responses })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::MissingAnswer);
        assert!(profiles.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unmapped_primary_value_is_stored_as_combination() {
        let profiles = in_memory_profiles();
        let handler = handler_with(profiles.clone());

        let profile = handler
            .handle(PredictSkinTypeCommand {
                responses: answers("very_greasy"),
            })
            .await
            .unwrap();

        assert_eq!(profile.skin_type, SkinType::Combination);
        assert_eq!(
            profiles.current().await.unwrap().map(|p| p.skin_type),
            Some(SkinType::Combination)
        );
    }

    #[tokio::test]
    async fn unknown_option_on_other_question_is_an_invalid_answer() {
        let handler = handler_with(in_memory_profiles());
        let responses = answers("tight_dry")
            .with_answer(qid("q2"), Answer::Single("sometimes".to_string()));
        let err = handler
            .handle(PredictSkinTypeCommand { responses })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidAnswer);
    }

    #[tokio::test]
    async fn unknown_question_is_rejected() {
        let handler = handler_with(in_memory_profiles());
        let responses = answers("tight_dry")
            .with_answer(qid("q99"), Answer::Single("never".to_string()));
        let err = handler
            .handle(PredictSkinTypeCommand { responses })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownQuestion);
    }

    /// Question bank that starts a newer prediction while serving this one.
    struct InterleavingQuestionBank {
        inner: StaticCatalog,
        tracker: Arc<RequestTracker>,
    }

    #[async_trait]
    impl QuestionBank for InterleavingQuestionBank {
        async fn questions(&self) -> Result<Vec<QuizQuestion>, CatalogError> {
            self.inner.questions().await
        }

        async fn skin_types(&self) -> Result<Vec<SkinTypeInfo>, CatalogError> {
            self.tracker.issue();
            self.inner.skin_types().await
        }
    }

    #[tokio::test]
    async fn superseded_prediction_is_returned_but_not_saved() {
        let tracker = Arc::new(RequestTracker::new());
        let profiles = in_memory_profiles();
        let handler = PredictSkinTypeHandler::new(
            Arc::new(InterleavingQuestionBank {
                inner: StaticCatalog::builtin().unwrap(),
                tracker: tracker.clone(),
            }),
            profiles.clone(),
            tracker,
            qid("q1"),
        );

        let profile = handler
            .handle(PredictSkinTypeCommand {
                responses: answers("tight_dry"),
            })
            .await
            .unwrap();

        assert_eq!(profile.skin_type, SkinType::Dry);
        assert!(profiles.current().await.unwrap().is_none());
    }

    /// Profile repository whose first save stalls.
    struct SlowFirstSave {
        inner: KeyValueProfileRepository,
        stalled: AtomicBool,
    }

    #[async_trait]
    impl ProfileRepository for SlowFirstSave {
        async fn current(&self) -> Result<Option<SkinProfile>, DomainError> {
            self.inner.current().await
        }

        async fn save(&self, profile: &SkinProfile) -> Result<(), DomainError> {
            if !self.stalled.swap(true, Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            self.inner.save(profile).await
        }

        async fn clear(&self) -> Result<(), DomainError> {
            self.inner.clear().await
        }

        async fn last_answers(&self) -> Result<Option<QuizResponseSet>, DomainError> {
            self.inner.last_answers().await
        }

        async fn save_answers(&self, answers: &QuizResponseSet) -> Result<(), DomainError> {
            self.inner.save_answers(answers).await
        }
    }

    #[tokio::test]
    async fn slow_older_save_does_not_overwrite_newer_prediction() {
        let profiles = Arc::new(SlowFirstSave {
            inner: KeyValueProfileRepository::new(Arc::new(InMemoryKeyValueStore::new())),
            stalled: AtomicBool::new(false),
        });
        let handler = Arc::new(handler_with(profiles.clone()));

        let older = {
            let handler = handler.clone();
            tokio::spawn(async move {
                handler
                    .handle(PredictSkinTypeCommand {
                        responses: answers("tight_dry"),
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let newer = handler
            .handle(PredictSkinTypeCommand {
                responses: answers("oily_shiny"),
            })
            .await
            .unwrap();
        older.await.unwrap().unwrap();

        assert_eq!(newer.skin_type, SkinType::Oily);
        assert_eq!(
            profiles.current().await.unwrap().map(|p| p.skin_type),
            Some(SkinType::Oily)
        );
        assert_eq!(profiles.last_answers().await.unwrap(), Some(answers("oily_shiny")));
    }
}
