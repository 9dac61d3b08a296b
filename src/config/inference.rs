//! Skin profile inference configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::QuestionId;
use crate::domain::skin::DEFAULT_PRIMARY_QUESTION;

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Question whose answer decides the skin type
    #[serde(default = "default_primary_question")]
    pub primary_question: String,
}

impl InferenceConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.primary_question_id().map(|_| ())
    }

    pub fn primary_question_id(&self) -> Result<QuestionId, ValidationError> {
        QuestionId::new(&self.primary_question).map_err(|_| ValidationError::MissingPrimaryQuestion)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            primary_question: default_primary_question(),
        }
    }
}

fn default_primary_question() -> String {
    DEFAULT_PRIMARY_QUESTION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_question() {
        let config = InferenceConfig::default();
        assert_eq!(config.primary_question_id().unwrap().as_str(), "q1");
    }

    #[test]
    fn blank_primary_question_is_rejected() {
        let config = InferenceConfig {
            primary_question: "  ".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::MissingPrimaryQuestion));
    }
}
