//! In-process wiring of the handlers and the local `SkincareService`.

use async_trait::async_trait;
use std::sync::Arc;

use super::handlers::{
    AnalyzeIngredientsCommand, AnalyzeIngredientsHandler, AnalyzeRoutineHandler,
    GetCurrentProfileHandler, GetDashboardOverviewHandler, GetProductHandler, GetProductQuery,
    GetProductsHandler, GetProductsQuery, GetQuizQuestionsHandler, GetSkinTypesHandler,
    ListBrandsHandler, PredictSkinTypeCommand, PredictSkinTypeHandler,
    RecommendForProfileHandler, RecommendSimilarHandler, RecommendSimilarQuery,
    RecommendationLimits, ResetProfileHandler, RoutineComposer,
};
use super::RequestTracker;
use crate::domain::{
    catalog::{Product, ProductFilter},
    foundation::{DomainError, ProductId, QuestionId},
    ingredients::{ConflictReport, IngredientAnalyzer},
    quiz::{QuizQuestion, QuizResponseSet},
    recommendation::RecommendationResult,
    skin::{SkinProfile, SkinTypeInfo},
};
use crate::ports::{
    CatalogProvider, ProfileRepository, QuestionBank, RoutineRepository, SkincareService,
};

/// Everything the application layer needs from the outside.
#[derive(Clone)]
pub struct ApplicationDependencies {
    pub profiles: Arc<dyn ProfileRepository>,
    pub routines: Arc<dyn RoutineRepository>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub question_bank: Arc<dyn QuestionBank>,
    pub limits: RecommendationLimits,
    pub primary_question: QuestionId,
}

/// `SkincareService` backed by the in-process handlers.
pub struct LocalSkincareService {
    predict: PredictSkinTypeHandler,
    recommend_similar: RecommendSimilarHandler,
    analyze: AnalyzeIngredientsHandler,
    get_products: GetProductsHandler,
    get_product: GetProductHandler,
    questions: GetQuizQuestionsHandler,
    skin_types: GetSkinTypesHandler,
}

impl LocalSkincareService {
    pub fn new(deps: &ApplicationDependencies, tracker: Arc<RequestTracker>) -> Self {
        Self {
            predict: PredictSkinTypeHandler::new(
                deps.question_bank.clone(),
                deps.profiles.clone(),
                tracker,
                deps.primary_question.clone(),
            ),
            recommend_similar: RecommendSimilarHandler::new(deps.catalog.clone(), deps.limits),
            analyze: AnalyzeIngredientsHandler::new(IngredientAnalyzer::new()),
            get_products: GetProductsHandler::new(deps.catalog.clone()),
            get_product: GetProductHandler::new(deps.catalog.clone()),
            questions: GetQuizQuestionsHandler::new(deps.question_bank.clone()),
            skin_types: GetSkinTypesHandler::new(deps.question_bank.clone()),
        }
    }
}

#[async_trait]
impl SkincareService for LocalSkincareService {
    async fn predict_skin_type(
        &self,
        responses: QuizResponseSet,
    ) -> Result<SkinProfile, DomainError> {
        self.predict.handle(PredictSkinTypeCommand { responses }).await
    }

    async fn get_recommendations(
        &self,
        seed_id: &ProductId,
        top_n: usize,
    ) -> Result<RecommendationResult, DomainError> {
        self.recommend_similar
            .handle(RecommendSimilarQuery {
                product_id: seed_id.clone(),
                top_n: Some(top_n),
            })
            .await
    }

    async fn analyze_ingredients(
        &self,
        ingredients: Vec<String>,
    ) -> Result<ConflictReport, DomainError> {
        self.analyze
            .handle(AnalyzeIngredientsCommand { ingredients })
            .await
    }

    async fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        self.get_products
            .handle(GetProductsQuery {
                filter: filter.clone(),
            })
            .await
    }

    async fn get_product(&self, product_id: &ProductId) -> Result<Product, DomainError> {
        self.get_product
            .handle(GetProductQuery {
                product_id: product_id.clone(),
            })
            .await
    }

    async fn get_quiz_questions(&self) -> Result<Vec<QuizQuestion>, DomainError> {
        self.questions.handle().await
    }

    async fn get_skin_types(&self) -> Result<Vec<SkinTypeInfo>, DomainError> {
        self.skin_types.handle().await
    }
}

/// The service plus the handlers that work on stored state. Prediction and
/// reset share one request tracker.
#[derive(Clone)]
pub struct Application {
    pub service: Arc<dyn SkincareService>,
    pub current_profile: Arc<GetCurrentProfileHandler>,
    pub reset_profile: Arc<ResetProfileHandler>,
    pub recommend_for_profile: Arc<RecommendForProfileHandler>,
    pub composer: Arc<RoutineComposer>,
    pub analyze_routine: Arc<AnalyzeRoutineHandler>,
    pub dashboard: Arc<GetDashboardOverviewHandler>,
    pub brands: Arc<ListBrandsHandler>,
}

impl Application {
    pub fn new(deps: ApplicationDependencies) -> Self {
        let tracker = Arc::new(RequestTracker::new());
        let service = LocalSkincareService::new(&deps, tracker.clone());

        Self {
            service: Arc::new(service),
            current_profile: Arc::new(GetCurrentProfileHandler::new(deps.profiles.clone())),
            reset_profile: Arc::new(ResetProfileHandler::new(deps.profiles.clone(), tracker)),
            recommend_for_profile: Arc::new(RecommendForProfileHandler::new(
                deps.catalog.clone(),
                deps.profiles.clone(),
                deps.limits,
            )),
            composer: Arc::new(RoutineComposer::new(
                deps.routines.clone(),
                deps.catalog.clone(),
            )),
            analyze_routine: Arc::new(AnalyzeRoutineHandler::new(
                deps.routines.clone(),
                IngredientAnalyzer::new(),
            )),
            dashboard: Arc::new(GetDashboardOverviewHandler::new(
                deps.profiles.clone(),
                deps.routines.clone(),
            )),
            brands: Arc::new(ListBrandsHandler::new(deps.catalog)),
        }
    }
}
