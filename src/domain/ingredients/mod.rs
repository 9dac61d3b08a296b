//! Ingredients module - name normalization, interaction rules and analysis.
//!
//! Everything here is pure and stateless.

mod analyzer;
mod normalize;
mod rules;

pub use analyzer::{ConflictReport, IngredientAnalyzer, TriggeredRule, NO_CONFLICTS_NOTE};
pub use normalize::{normalize_ingredient, normalized_set};
pub use rules::{IngredientRule, Severity, DEFAULT_RULES};
