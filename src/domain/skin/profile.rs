//! SkinProfile - the result of one inference run.

use serde::{Deserialize, Serialize};

use super::SkinType;
use crate::domain::foundation::Fraction;

/// Classified skin profile. Superseded, never merged, by a later inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinProfile {
    pub skin_type: SkinType,
    pub confidence: Fraction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SkinProfile {
    pub fn new(skin_type: SkinType, confidence: Fraction, description: Option<String>) -> Self {
        Self {
            skin_type,
            confidence,
            description,
        }
    }
}
