//! Request DTOs for the advisor endpoints.
//!
//! Responses reuse the domain types directly; their serde shapes are the
//! wire format.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ProductFilter;
use crate::domain::quiz::QuizResponseSet;

/// Body of `POST /predict/skin-type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictSkinTypeRequest {
    pub responses: QuizResponseSet,
}

/// Body of `POST /analyze/ingredients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeIngredientsRequest {
    pub ingredients: Vec<String>,
}

/// `?top_n=` query parameter.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TopNParams {
    pub top_n: Option<usize>,
}

/// `GET /products` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListParams {
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub brand: Option<String>,
    pub search: Option<String>,
}

impl From<ProductListParams> for ProductFilter {
    fn from(params: ProductListParams) -> Self {
        ProductFilter {
            product_type: params.product_type,
            brand: params.brand,
            search: params.search,
        }
    }
}
