//! AnalyzeIngredients - checks a free-form ingredient list for conflicts.

use crate::domain::foundation::DomainError;
use crate::domain::ingredients::{ConflictReport, IngredientAnalyzer};

#[derive(Debug, Clone, Default)]
pub struct AnalyzeIngredientsCommand {
    pub ingredients: Vec<String>,
}

/// Handler wrapping the stateless analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeIngredientsHandler {
    analyzer: IngredientAnalyzer,
}

impl AnalyzeIngredientsHandler {
    pub fn new(analyzer: IngredientAnalyzer) -> Self {
        Self { analyzer }
    }

    pub async fn handle(&self, cmd: AnalyzeIngredientsCommand) -> Result<ConflictReport, DomainError> {
        let report = self.analyzer.analyze(&cmd.ingredients);
        if report.has_conflicts() {
            tracing::debug!(
                submitted = cmd.ingredients.len(),
                warnings = report.warnings.len(),
                blocking = report.is_blocking(),
                "Ingredient conflicts found"
            );
        }
        Ok(report)
    }
}
