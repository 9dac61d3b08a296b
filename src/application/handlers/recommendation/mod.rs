//! Recommendation handlers.

mod recommend_for_profile;
mod recommend_similar;

pub use recommend_for_profile::{RecommendForProfileHandler, RecommendForProfileQuery};
pub use recommend_similar::{RecommendSimilarHandler, RecommendSimilarQuery};

use crate::domain::foundation::ValidationError;
use crate::ports::DEFAULT_TOP_N;

/// Bounds applied to caller-supplied `top_n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationLimits {
    pub default_top_n: usize,
    pub max_top_n: usize,
}

impl RecommendationLimits {
    /// Resolves the requested count. Zero is left for the engine to reject.
    pub fn resolve(&self, requested: Option<usize>) -> Result<usize, ValidationError> {
        let top_n = requested.unwrap_or(self.default_top_n);
        if top_n > self.max_top_n {
            return Err(ValidationError::out_of_range(
                "top_n",
                1,
                self.max_top_n as i64,
                top_n.min(i64::MAX as usize) as i64,
            ));
        }
        Ok(top_n)
    }
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            default_top_n: DEFAULT_TOP_N,
            max_top_n: 50,
        }
    }
}
