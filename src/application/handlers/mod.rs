//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod catalog;
pub mod dashboard;
pub mod ingredients;
pub mod recommendation;
pub mod routine;
pub mod skin_profile;

pub use catalog::{
    GetProductHandler, GetProductQuery, GetProductsHandler, GetProductsQuery,
    GetQuizQuestionsHandler, GetSkinTypesHandler, ListBrandsHandler,
};
pub use dashboard::{DashboardOverview, GetDashboardOverviewHandler, RoutineCounts};
pub use ingredients::{
    AnalyzeIngredientsCommand, AnalyzeIngredientsHandler, AnalyzeRoutineHandler,
    AnalyzeRoutineQuery, RoutineAnalysis,
};
pub use recommendation::{
    RecommendForProfileHandler, RecommendForProfileQuery, RecommendSimilarHandler,
    RecommendSimilarQuery, RecommendationLimits,
};
pub use routine::{
    AddToRoutineCommand, MoveInRoutineCommand, RemoveFromRoutineCommand, RoutineComposer,
    RoutinesView,
};
pub use skin_profile::{
    CurrentProfile, GetCurrentProfileHandler, PredictSkinTypeCommand, PredictSkinTypeHandler,
    ResetProfileHandler,
};
