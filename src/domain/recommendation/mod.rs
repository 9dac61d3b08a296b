//! Recommendation module - similarity scoring and ranking.

mod engine;
mod similarity;

pub use engine::{
    Recommendation, RecommendationEngine, RecommendationResult, RecommendationSeed,
};
pub use similarity::{coverage, jaccard};
