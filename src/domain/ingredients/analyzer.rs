//! Ingredient Interaction Analyzer - pure conflict detection.

use serde::{Deserialize, Serialize};

use super::{normalized_set, IngredientRule, Severity, DEFAULT_RULES};

/// Safety note reported when no rule triggers.
pub const NO_CONFLICTS_NOTE: &str = "No known conflicts detected";

/// A rule that matched the analyzed ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredRule {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    pub ingredients: Vec<String>,
}

/// Outcome of an analysis. `safety` is only populated when `warnings` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConflictReport {
    pub warnings: Vec<TriggeredRule>,
    pub safety: Vec<String>,
}

impl ConflictReport {
    pub fn has_conflicts(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// True when any triggered rule has `block` severity.
    pub fn is_blocking(&self) -> bool {
        self.warnings.iter().any(|w| w.severity == Severity::Block)
    }
}

/// Checks ingredient sets against an interaction rule table.
#[derive(Debug, Clone)]
pub struct IngredientAnalyzer {
    rules: Vec<IngredientRule>,
}

impl IngredientAnalyzer {
    /// Analyzer over the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.clone())
    }

    pub fn with_rules(rules: Vec<IngredientRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[IngredientRule] {
        &self.rules
    }

    /// Reports every rule whose ingredients are all present, in table order.
    ///
    /// Input order and duplicates do not affect the result.
    pub fn analyze<I, S>(&self, ingredients: I) -> ConflictReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let present = normalized_set(ingredients);

        let warnings: Vec<TriggeredRule> = self
            .rules
            .iter()
            .filter(|rule| rule.is_triggered_by(&present))
            .map(|rule| TriggeredRule {
                severity: rule.severity,
                message: rule.message.clone(),
                ingredients: rule.ingredients().iter().cloned().collect(),
            })
            .collect();

        let safety = if warnings.is_empty() {
            vec![NO_CONFLICTS_NOTE.to_string()]
        } else {
            Vec::new()
        };

        ConflictReport { warnings, safety }
    }
}

impl Default for IngredientAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
