//! Recommendation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::handlers::RecommendationLimits;
use crate::ports::DEFAULT_TOP_N;

const MAX_ALLOWED_TOP_N: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Result count when a request does not specify `top_n`
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Largest `top_n` a request may ask for
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
}

impl RecommendationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_top_n == 0 || self.max_top_n > MAX_ALLOWED_TOP_N {
            return Err(ValidationError::InvalidMaxTopN);
        }
        if self.default_top_n == 0 || self.default_top_n > self.max_top_n {
            return Err(ValidationError::InvalidDefaultTopN);
        }
        Ok(())
    }

    pub fn limits(&self) -> RecommendationLimits {
        RecommendationLimits {
            default_top_n: self.default_top_n,
            max_top_n: self.max_top_n,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_max_top_n() -> usize {
    50
}
