//! RecommendSimilar - Query handler ranking products against a seed product.

use std::sync::Arc;

use super::RecommendationLimits;
use crate::domain::foundation::{DomainError, ProductId};
use crate::domain::recommendation::{RecommendationEngine, RecommendationResult, RecommendationSeed};
use crate::ports::CatalogProvider;

#[derive(Debug, Clone)]
pub struct RecommendSimilarQuery {
    pub product_id: ProductId,
    /// `None` uses the configured default.
    pub top_n: Option<usize>,
}

pub struct RecommendSimilarHandler {
    catalog: Arc<dyn CatalogProvider>,
    engine: RecommendationEngine,
    limits: RecommendationLimits,
}

impl RecommendSimilarHandler {
    pub fn new(catalog: Arc<dyn CatalogProvider>, limits: RecommendationLimits) -> Self {
        Self {
            catalog,
            engine: RecommendationEngine::new(),
            limits,
        }
    }

    pub async fn handle(
        &self,
        query: RecommendSimilarQuery,
    ) -> Result<RecommendationResult, DomainError> {
        let top_n = self.limits.resolve(query.top_n)?;
        let products = self.catalog.products().await?;
        let result = self.engine.recommend(
            &RecommendationSeed::Product(query.product_id.clone()),
            &products,
            top_n,
        )?;

        tracing::debug!(
            product_id = %query.product_id,
            top_n,
            returned = result.len(),
            "Similar products ranked"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::StaticCatalog;
    use crate::domain::catalog::fixtures::product;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> RecommendSimilarHandler {
        let catalog = StaticCatalog::new(
            vec![
                product("seed", "Serum", "A", &["Niacinamide", "Zinc PCA"]),
                product("twin", "Serum", "B", &["Niacinamide", "Zinc PCA"]),
                product("half", "Toner", "C", &["Niacinamide", "Water"]),
                product("none", "Mask", "D", &["Kaolin"]),
            ],
            vec![],
            vec![],
        )
        .unwrap();
        RecommendSimilarHandler::new(Arc::new(catalog), RecommendationLimits::default())
    }

    fn query(id: &str, top_n: Option<usize>) -> RecommendSimilarQuery {
        RecommendSimilarQuery {
            product_id: ProductId::new(id).unwrap(),
            top_n,
        }
    }

    #[tokio::test]
    async fn ranks_by_shared_ingredients_and_excludes_seed() {
        let result = handler().handle(query("seed", None)).await.unwrap();
        let ids: Vec<&str> = result
            .recommendations
            .iter()
            .map(|r| r.product.product_id.as_str())
            .collect();
        assert_eq!(ids, vec!["twin", "half", "none"]);
        assert_eq!(result.product_id.as_ref().map(|p| p.as_str()), Some("seed"));
    }

    #[tokio::test]
    async fn top_n_truncates() {
        let result = handler().handle(query("seed", Some(1))).await.unwrap();
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn unknown_seed_is_not_found() {
        let err = handler().handle(query("ghost", None)).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ProductNotFound);
    }

    #[tokio::test]
    async fn zero_and_oversized_top_n_are_validation_errors() {
        assert!(handler().handle(query("seed", Some(0))).await.unwrap_err().is_validation());
        assert!(handler().handle(query("seed", Some(500))).await.unwrap_err().is_validation());
    }
}
