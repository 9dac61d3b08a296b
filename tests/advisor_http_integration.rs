//! Integration tests for the advisor HTTP endpoints.
//!
//! Each test builds the full router over an in-memory store and the
//! built-in catalog, then drives it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use skincare_advisor::adapters::http::{api_router, HttpSettings};
use skincare_advisor::adapters::InMemoryKeyValueStore;
use skincare_advisor::bootstrap::build_application;
use skincare_advisor::config::AppConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn router() -> Router {
    let app = build_application(&AppConfig::default(), Arc::new(InMemoryKeyValueStore::new()))
        .await
        .unwrap();
    api_router(&app, &HttpSettings::default())
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// =============================================================================
// Prediction
// =============================================================================

#[tokio::test]
async fn predict_returns_profile_and_stores_it() {
    let router = router().await;
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/predict/skin-type",
        Some(json!({ "responses": { "q1": "tight_dry", "q2": "never", "q5": ["dryness_flaking"] } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skin_type"], "Dry");
    assert!((body["confidence"].as_f64().unwrap() - 0.95).abs() < 1e-9);
    assert!(body["description"].is_string());

    let (status, stored) = send(&router, Method::GET, "/api/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["profile"]["skin_type"], "Dry");
    assert_eq!(stored["answers"]["q1"], "tight_dry");
}

#[tokio::test]
async fn delete_profile_forgets_prediction() {
    let router = router().await;
    send(
        &router,
        Method::POST,
        "/api/predict/skin-type",
        Some(json!({ "responses": { "q1": "oily_shiny" } })),
    )
    .await;

    let (status, body) = send(&router, Method::DELETE, "/api/profile", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, stored) = send(&router, Method::GET, "/api/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(stored["profile"].is_null());
    assert!(stored["answers"].is_null());

    let (status, _) = send(&router, Method::GET, "/api/profile/recommendations", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn predict_without_primary_answer_is_bad_request() {
    let router = router().await;
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/predict/skin-type",
        Some(json!({ "responses": { "q2": "never" } })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_ANSWER");
}

#[tokio::test]
async fn predict_classifies_unmapped_primary_value_as_combination() {
    let router = router().await;
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/predict/skin-type",
        Some(json!({ "responses": { "q1": "very_greasy" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skin_type"], "Combination");
}

#[tokio::test]
async fn predict_rejects_unknown_option_on_secondary_question() {
    let router = router().await;
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/predict/skin-type",
        Some(json!({ "responses": { "q1": "tight_dry", "q2": "sometimes" } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ANSWER");
}

// =============================================================================
// Recommendations
// =============================================================================

#[tokio::test]
async fn recommend_returns_top_n_without_seed() {
    let router = router().await;
    let (status, body) = send(&router, Method::GET, "/api/recommend/p001?top_n=3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product_id"], "p001");
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert!(recs.iter().all(|r| r["product_id"] != "p001"));
    assert!(recs.iter().all(|r| r["match_reason"].is_string()));

    let scores: Vec<f64> = recs.iter().map(|r| r["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn recommend_defaults_to_five() {
    let router = router().await;
    let (_, body) = send(&router, Method::GET, "/api/recommend/p004", None).await;
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn recommend_unknown_product_is_not_found() {
    let router = router().await;
    let (status, body) = send(&router, Method::GET, "/api/recommend/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PRODUCT_NOT_FOUND");
}

#[tokio::test]
async fn product_named_profile_is_a_seed_like_any_other() {
    let router = router().await;
    let (status, body) = send(&router, Method::GET, "/api/recommend/profile", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PRODUCT_NOT_FOUND");
}

#[tokio::test]
async fn recommend_zero_top_n_is_bad_request() {
    let router = router().await;
    let (status, _) = send(&router, Method::GET, "/api/recommend/p001?top_n=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_recommendations_need_a_stored_profile() {
    let router = router().await;
    let (status, _) = send(&router, Method::GET, "/api/profile/recommendations", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(
        &router,
        Method::POST,
        "/api/predict/skin-type",
        Some(json!({ "responses": { "q1": "oily_shiny" } })),
    )
    .await;

    let (status, body) = send(&router, Method::GET, "/api/profile/recommendations?top_n=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skin_type"], "Oily");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
}

// =============================================================================
// Ingredient analysis
// =============================================================================

#[tokio::test]
async fn analyze_flags_retinol_with_salicylic_acid() {
    let router = router().await;
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/analyze/ingredients",
        Some(json!({ "ingredients": ["Retinol", "salicylic acid"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "warnings": [{
                "type": "warning",
                "message": "Retinol and Salicylic Acid may cause irritation when used together",
                "ingredients": ["retinol", "salicylic acid"]
            }],
            "safety": []
        })
    );
}

#[tokio::test]
async fn analyze_without_conflicts_reports_safety_note() {
    let router = router().await;
    let (_, body) = send(
        &router,
        Method::POST,
        "/api/analyze/ingredients",
        Some(json!({ "ingredients": ["niacinamide"] })),
    )
    .await;
    assert_eq!(body["warnings"], json!([]));
    assert_eq!(body["safety"], json!(["No known conflicts detected"]));
}

// =============================================================================
// Catalog and quiz schema
// =============================================================================

#[tokio::test]
async fn products_filter_by_type_and_brand() {
    let router = router().await;
    let (status, body) = send(
        &router,
        Method::GET,
        "/api/products?type=serum&brand=ordinary",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p["type"] == "Serum"));
    assert!(products.iter().all(|p| p["brand"] == "The Ordinary"));
}

#[tokio::test]
async fn products_search_matches_ingredients() {
    let router = router().await;
    let (_, body) = send(&router, Method::GET, "/api/products?search=retinol", None).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p006"]);
}

#[tokio::test]
async fn product_lookup_and_not_found() {
    let router = router().await;
    let (status, body) = send(&router, Method::GET, "/api/product/p011", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Moisturizing Cream");

    let (status, _) = send(&router, Method::GET, "/api/product/p999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quiz_questions_and_skin_types_are_served() {
    let router = router().await;
    let (_, questions) = send(&router, Method::GET, "/api/quiz/questions", None).await;
    let questions = questions.as_array().unwrap();
    assert_eq!(questions[0]["id"], "q1");
    assert_eq!(questions[4]["type"], "multiple");

    let (_, types) = send(&router, Method::GET, "/api/skin-types", None).await;
    assert_eq!(types.as_array().unwrap().len(), 5);
    assert!(types[0]["type"].is_string());
    assert!(types[0]["description"].is_string());
}

#[tokio::test]
async fn health_check_responds() {
    let router = router().await;
    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
