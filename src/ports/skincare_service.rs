//! SkincareService port - the core-facing contract.
//!
//! The same contract is served whether the computations run in-process
//! (see `application::LocalSkincareService`) or behind a remote service.

use async_trait::async_trait;

use crate::domain::{
    catalog::{Product, ProductFilter},
    foundation::{DomainError, ProductId},
    ingredients::ConflictReport,
    quiz::{QuizQuestion, QuizResponseSet},
    recommendation::RecommendationResult,
    skin::{SkinProfile, SkinTypeInfo},
};

/// Default number of recommendations when the caller does not ask for more.
pub const DEFAULT_TOP_N: usize = 5;

#[async_trait]
pub trait SkincareService: Send + Sync {
    /// Classify answers and persist the resulting profile.
    ///
    /// Fails with a validation error when the primary answer is missing.
    async fn predict_skin_type(&self, responses: QuizResponseSet)
        -> Result<SkinProfile, DomainError>;

    /// Products similar to `seed_id`. Fails with not-found for unknown ids.
    async fn get_recommendations(
        &self,
        seed_id: &ProductId,
        top_n: usize,
    ) -> Result<RecommendationResult, DomainError>;

    async fn analyze_ingredients(&self, ingredients: Vec<String>)
        -> Result<ConflictReport, DomainError>;

    async fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError>;

    async fn get_product(&self, product_id: &ProductId) -> Result<Product, DomainError>;

    async fn get_quiz_questions(&self) -> Result<Vec<QuizQuestion>, DomainError>;

    async fn get_skin_types(&self) -> Result<Vec<SkinTypeInfo>, DomainError>;
}
