//! Skin Profile Inference - deterministic classification of quiz answers.
//!
//! # Algorithm
//!
//! 1. The primary question's answer is looked up in [`PRIMARY_SIGNALS`].
//!    Unmapped values fall through to [`SkinType::Combination`].
//! 2. Every other answered question that carries a signal either
//!    corroborates the chosen type or not.
//! 3. `confidence = BASELINE + WEIGHT * corroborating / signalled`.
//!
//! The result is reproducible for identical input.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{SkinProfile, SkinType, SkinTypeInfo};
use crate::domain::foundation::{Fraction, QuestionId, ValidationError};
use crate::domain::quiz::{Answer, QuizResponseSet};

/// Confidence assigned before any corroboration.
pub const BASELINE_CONFIDENCE: f64 = 0.85;

/// Maximum confidence added when every signalling answer agrees.
pub const CORROBORATION_WEIGHT: f64 = 0.10;

/// Question whose answer decides the skin type unless configured otherwise.
pub const DEFAULT_PRIMARY_QUESTION: &str = "q1";

/// Primary answer value -> skin type.
static PRIMARY_SIGNALS: Lazy<HashMap<&'static str, SkinType>> = Lazy::new(|| {
    HashMap::from([
        ("tight_dry", SkinType::Dry),
        ("comfortable", SkinType::Normal),
        ("oily_shiny", SkinType::Oily),
        ("irritated", SkinType::Sensitive),
    ])
});

/// Secondary answer value -> skin types it points at.
static CORROBORATING_SIGNALS: Lazy<HashMap<&'static str, &'static [SkinType]>> = Lazy::new(|| {
    HashMap::from([
        ("never", &[SkinType::Dry][..]),
        ("rarely", &[SkinType::Normal][..]),
        ("t_zone_only", &[SkinType::Combination][..]),
        ("all_over", &[SkinType::Oily][..]),
        ("rarely_reacts", &[SkinType::Normal][..]),
        ("sometimes_stings", &[SkinType::Sensitive][..]),
        ("often_red", &[SkinType::Sensitive][..]),
        ("barely_visible", &[SkinType::Dry, SkinType::Normal][..]),
        ("visible_t_zone", &[SkinType::Combination][..]),
        ("large_all_over", &[SkinType::Oily][..]),
        ("acne", &[SkinType::Oily, SkinType::Combination][..]),
        ("dryness_flaking", &[SkinType::Dry][..]),
        ("redness", &[SkinType::Sensitive][..]),
    ])
});

/// Classifies quiz answers into a [`SkinProfile`].
#[derive(Debug, Clone)]
pub struct SkinProfileInference {
    primary_question: QuestionId,
    reference: Vec<SkinTypeInfo>,
}

impl SkinProfileInference {
    /// Creates an engine keyed on `primary_question`, resolving descriptions
    /// from the `reference` table.
    pub fn new(primary_question: QuestionId, reference: Vec<SkinTypeInfo>) -> Self {
        Self {
            primary_question,
            reference,
        }
    }

    pub fn primary_question(&self) -> &QuestionId {
        &self.primary_question
    }

    /// Predicts the skin type for a completed response set.
    ///
    /// # Errors
    ///
    /// `ValidationError::MissingAnswer` when the primary question is unanswered.
    pub fn predict(&self, responses: &QuizResponseSet) -> Result<SkinProfile, ValidationError> {
        let primary = responses
            .get(&self.primary_question)
            .ok_or_else(|| ValidationError::missing_answer(self.primary_question.as_str()))?;

        let skin_type = classify_primary(primary);
        let confidence = self.confidence_for(skin_type, responses);
        let description = self
            .reference
            .iter()
            .find(|info| info.skin_type == skin_type)
            .map(|info| info.description.clone());

        Ok(SkinProfile::new(skin_type, confidence, description))
    }

    fn confidence_for(&self, skin_type: SkinType, responses: &QuizResponseSet) -> Fraction {
        let mut signalled = 0usize;
        let mut corroborating = 0usize;

        for (id, answer) in responses.iter() {
            if id == &self.primary_question {
                continue;
            }
            let signals: Vec<SkinType> = answer
                .values()
                .into_iter()
                .filter_map(|v| CORROBORATING_SIGNALS.get(v))
                .flat_map(|types| types.iter().copied())
                .collect();
            if signals.is_empty() {
                continue;
            }
            signalled += 1;
            if signals.contains(&skin_type) {
                corroborating += 1;
            }
        }

        let agreement = Fraction::ratio(corroborating, signalled).value();
        Fraction::new(BASELINE_CONFIDENCE + CORROBORATION_WEIGHT * agreement)
    }
}

/// Multi-choice primary answers resolve on their first value in lexical order.
fn classify_primary(answer: &Answer) -> SkinType {
    answer
        .values()
        .first()
        .and_then(|v| PRIMARY_SIGNALS.get(*v).copied())
        .unwrap_or(SkinType::Combination)
}
