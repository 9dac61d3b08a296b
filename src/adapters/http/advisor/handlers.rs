//! HTTP handlers for the advisor endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::{
    GetCurrentProfileHandler, GetDashboardOverviewHandler, ListBrandsHandler,
    RecommendForProfileHandler, RecommendForProfileQuery, ResetProfileHandler,
};
use crate::application::Application;
use crate::domain::catalog::ProductFilter;
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::SkincareService;

use super::dto::{AnalyzeIngredientsRequest, PredictSkinTypeRequest, ProductListParams, TopNParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdvisorHandlers {
    service: Arc<dyn SkincareService>,
    current_profile: Arc<GetCurrentProfileHandler>,
    reset_profile: Arc<ResetProfileHandler>,
    recommend_for_profile: Arc<RecommendForProfileHandler>,
    dashboard: Arc<GetDashboardOverviewHandler>,
    brands: Arc<ListBrandsHandler>,
    default_top_n: usize,
    verbose_errors: bool,
}

impl AdvisorHandlers {
    pub fn new(app: &Application, default_top_n: usize, verbose_errors: bool) -> Self {
        Self {
            service: app.service.clone(),
            current_profile: app.current_profile.clone(),
            reset_profile: app.reset_profile.clone(),
            recommend_for_profile: app.recommend_for_profile.clone(),
            dashboard: app.dashboard.clone(),
            brands: app.brands.clone(),
            default_top_n,
            verbose_errors,
        }
    }

    fn error(&self, error: DomainError) -> Response {
        domain_error_response(error, self.verbose_errors)
    }
}

fn ok<T: serde::Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

fn parse_product_id(raw: &str) -> Result<ProductId, Response> {
    ProductId::new(raw).map_err(|e| {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(e.to_string()))).into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/predict/skin-type - Classify quiz answers
pub async fn predict_skin_type(
    State(handlers): State<AdvisorHandlers>,
    Json(req): Json<PredictSkinTypeRequest>,
) -> Response {
    match handlers.service.predict_skin_type(req.responses).await {
        Ok(profile) => ok(profile),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/recommend/:product_id - Products similar to a seed product
pub async fn recommend_similar(
    State(handlers): State<AdvisorHandlers>,
    Path(product_id): Path<String>,
    Query(params): Query<TopNParams>,
) -> Response {
    let product_id = match parse_product_id(&product_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let top_n = params.top_n.unwrap_or(handlers.default_top_n);

    match handlers.service.get_recommendations(&product_id, top_n).await {
        Ok(result) => ok(result),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/profile/recommendations - Products suited to the stored skin profile
pub async fn recommend_for_profile(
    State(handlers): State<AdvisorHandlers>,
    Query(params): Query<TopNParams>,
) -> Response {
    let query = RecommendForProfileQuery { top_n: params.top_n };
    match handlers.recommend_for_profile.handle(query).await {
        Ok(result) => ok(result),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/analyze/ingredients - Check an ingredient list for conflicts
pub async fn analyze_ingredients(
    State(handlers): State<AdvisorHandlers>,
    Json(req): Json<AnalyzeIngredientsRequest>,
) -> Response {
    match handlers.service.analyze_ingredients(req.ingredients).await {
        Ok(report) => ok(report),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/products - Browse the catalog
pub async fn list_products(
    State(handlers): State<AdvisorHandlers>,
    Query(params): Query<ProductListParams>,
) -> Response {
    let filter: ProductFilter = params.into();
    match handlers.service.get_products(&filter).await {
        Ok(products) => ok(products),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/products/brands - Distinct brands
pub async fn list_brands(State(handlers): State<AdvisorHandlers>) -> Response {
    match handlers.brands.handle().await {
        Ok(brands) => ok(brands),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/product/:product_id - One product
pub async fn get_product(
    State(handlers): State<AdvisorHandlers>,
    Path(product_id): Path<String>,
) -> Response {
    let product_id = match parse_product_id(&product_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match handlers.service.get_product(&product_id).await {
        Ok(product) => ok(product),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/quiz/questions
pub async fn quiz_questions(State(handlers): State<AdvisorHandlers>) -> Response {
    match handlers.service.get_quiz_questions().await {
        Ok(questions) => ok(questions),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/skin-types
pub async fn skin_types(State(handlers): State<AdvisorHandlers>) -> Response {
    match handlers.service.get_skin_types().await {
        Ok(types) => ok(types),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/profile - Stored profile and answers
pub async fn current_profile(State(handlers): State<AdvisorHandlers>) -> Response {
    match handlers.current_profile.handle().await {
        Ok(current) => ok(current),
        Err(e) => handlers.error(e),
    }
}

/// DELETE /api/profile - Forget the stored profile and answers
pub async fn reset_profile(State(handlers): State<AdvisorHandlers>) -> Response {
    match handlers.reset_profile.handle().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/dashboard - Profile and routine summary
pub async fn dashboard(State(handlers): State<AdvisorHandlers>) -> Response {
    match handlers.dashboard.handle().await {
        Ok(overview) => ok(overview),
        Err(e) => handlers.error(e),
    }
}
