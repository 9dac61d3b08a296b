//! HTTP adapter for the advisor endpoints: prediction, recommendations,
//! ingredient analysis, catalog and quiz schema, profile and dashboard.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeIngredientsRequest, PredictSkinTypeRequest, ProductListParams, TopNParams,
};
pub use handlers::AdvisorHandlers;
pub use routes::advisor_routes;
