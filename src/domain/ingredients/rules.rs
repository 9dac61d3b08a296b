//! Static table of known ingredient interactions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::normalized_set;

/// How strongly a combination should be discouraged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Block,
}

/// A problematic combination of ingredients. Matching is symmetric: the rule
/// applies whenever every listed ingredient is present, in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRule {
    ingredients: BTreeSet<String>,
    pub severity: Severity,
    pub message: String,
}

impl IngredientRule {
    pub fn new<I, S>(ingredients: I, severity: Severity, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            ingredients: normalized_set(ingredients),
            severity,
            message: message.into(),
        }
    }

    /// Normalized ingredient names this rule requires.
    pub fn ingredients(&self) -> &BTreeSet<String> {
        &self.ingredients
    }

    /// True when every required ingredient is in `present`.
    pub fn is_triggered_by(&self, present: &BTreeSet<String>) -> bool {
        !self.ingredients.is_empty() && self.ingredients.is_subset(present)
    }
}

/// Built-in interaction rules, in reporting order.
pub static DEFAULT_RULES: Lazy<Vec<IngredientRule>> = Lazy::new(|| {
    vec![
        IngredientRule::new(
            ["retinol", "salicylic acid"],
            Severity::Warning,
            "Retinol and Salicylic Acid may cause irritation when used together",
        ),
        IngredientRule::new(
            ["retinol", "glycolic acid"],
            Severity::Warning,
            "Retinol and Glycolic Acid together can over-exfoliate and irritate the skin",
        ),
        IngredientRule::new(
            ["retinol", "lactic acid"],
            Severity::Warning,
            "Retinol and Lactic Acid together can increase dryness and irritation",
        ),
        IngredientRule::new(
            ["retinol", "benzoyl peroxide"],
            Severity::Block,
            "Benzoyl Peroxide can deactivate Retinol; do not layer them in the same routine",
        ),
        IngredientRule::new(
            ["vitamin c", "benzoyl peroxide"],
            Severity::Warning,
            "Benzoyl Peroxide oxidizes Vitamin C and reduces its effectiveness",
        ),
        IngredientRule::new(
            ["vitamin c", "glycolic acid"],
            Severity::Warning,
            "Vitamin C and Glycolic Acid together may sting on sensitive skin",
        ),
        IngredientRule::new(
            ["glycolic acid", "salicylic acid"],
            Severity::Warning,
            "Combining Glycolic Acid and Salicylic Acid can over-exfoliate",
        ),
    ]
});
