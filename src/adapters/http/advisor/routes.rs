//! HTTP routes for the advisor endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_ingredients, current_profile, dashboard, get_product, list_brands, list_products,
    predict_skin_type, quiz_questions, recommend_for_profile, recommend_similar, reset_profile,
    skin_types, AdvisorHandlers,
};

/// Creates the advisor router. Mounted under `/api`.
pub fn advisor_routes(handlers: AdvisorHandlers) -> Router {
    Router::new()
        .route("/predict/skin-type", post(predict_skin_type))
        .route("/recommend/:product_id", get(recommend_similar))
        .route("/analyze/ingredients", post(analyze_ingredients))
        .route("/products", get(list_products))
        .route("/products/brands", get(list_brands))
        .route("/product/:product_id", get(get_product))
        .route("/quiz/questions", get(quiz_questions))
        .route("/skin-types", get(skin_types))
        .route("/profile", get(current_profile).delete(reset_profile))
        .route("/profile/recommendations", get(recommend_for_profile))
        .route("/dashboard", get(dashboard))
        .with_state(handlers)
}
