//! RecommendForProfile - Query handler ranking products for the stored
//! skin profile.

use std::sync::Arc;

use super::RecommendationLimits;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::recommendation::{RecommendationEngine, RecommendationResult, RecommendationSeed};
use crate::ports::{CatalogProvider, ProfileRepository};

#[derive(Debug, Clone, Default)]
pub struct RecommendForProfileQuery {
    pub top_n: Option<usize>,
}

pub struct RecommendForProfileHandler {
    catalog: Arc<dyn CatalogProvider>,
    profiles: Arc<dyn ProfileRepository>,
    engine: RecommendationEngine,
    limits: RecommendationLimits,
}

impl RecommendForProfileHandler {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        profiles: Arc<dyn ProfileRepository>,
        limits: RecommendationLimits,
    ) -> Self {
        Self {
            catalog,
            profiles,
            engine: RecommendationEngine::new(),
            limits,
        }
    }

    /// # Errors
    ///
    /// `ValidationFailed` when no profile has been stored yet.
    pub async fn handle(
        &self,
        query: RecommendForProfileQuery,
    ) -> Result<RecommendationResult, DomainError> {
        let top_n = self.limits.resolve(query.top_n)?;
        let profile = self.profiles.current().await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ValidationFailed,
                "No skin profile stored; complete the quiz first",
            )
            .with_detail("field", "skin_profile")
        })?;

        let products = self.catalog.products().await?;
        self.engine
            .recommend(&RecommendationSeed::Profile(profile), &products, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::StaticCatalog;
    use crate::adapters::repository::KeyValueProfileRepository;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::catalog::fixtures::product;
    use crate::domain::foundation::Fraction;
    use crate::domain::skin::{SkinProfile, SkinType};

    fn setup() -> (Arc<KeyValueProfileRepository>, RecommendForProfileHandler) {
        let catalog = StaticCatalog::new(
            vec![
                product("oil", "Serum", "A", &["Salicylic Acid"]),
                product("dry", "Moisturizer", "B", &["Ceramides", "Glycerin", "Squalane"]),
                product("mid", "Cleanser", "C", &["Glycerin"]),
            ],
            vec![],
            vec![],
        )
        .unwrap();
        let profiles = Arc::new(KeyValueProfileRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let handler = RecommendForProfileHandler::new(
            Arc::new(catalog),
            profiles.clone(),
            RecommendationLimits::default(),
        );
        (profiles, handler)
    }

    #[tokio::test]
    async fn ranks_by_skin_type_affinity() {
        let (profiles, handler) = setup();
        profiles
            .save(&SkinProfile::new(SkinType::Dry, Fraction::new(0.9), None))
            .await
            .unwrap();

        let result = handler.handle(RecommendForProfileQuery::default()).await.unwrap();

        assert_eq!(result.skin_type, Some(SkinType::Dry));
        assert_eq!(result.recommendations[0].product.product_id.as_str(), "dry");
        assert!(result.recommendations[0].reason.starts_with("Recommended for Dry skin"));
    }

    #[tokio::test]
    async fn missing_profile_is_a_validation_error() {
        let (_profiles, handler) = setup();
        let err = handler
            .handle(RecommendForProfileQuery::default())
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
