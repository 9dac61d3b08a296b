//! AnalyzeRoutine - runs the analyzer over the products of stored routines.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::ingredients::{ConflictReport, IngredientAnalyzer};
use crate::domain::routine::RoutinePeriod;
use crate::ports::RoutineRepository;

/// `period: None` analyzes morning and evening together.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRoutineQuery {
    pub period: Option<RoutinePeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutineAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<RoutinePeriod>,
    pub product_count: usize,
    pub ingredients: Vec<String>,
    #[serde(flatten)]
    pub report: ConflictReport,
}

pub struct AnalyzeRoutineHandler {
    routines: Arc<dyn RoutineRepository>,
    analyzer: IngredientAnalyzer,
}

impl AnalyzeRoutineHandler {
    pub fn new(routines: Arc<dyn RoutineRepository>, analyzer: IngredientAnalyzer) -> Self {
        Self { routines, analyzer }
    }

    pub async fn handle(&self, query: AnalyzeRoutineQuery) -> Result<RoutineAnalysis, DomainError> {
        let periods: &[RoutinePeriod] = match &query.period {
            Some(period) => std::slice::from_ref(period),
            None => &RoutinePeriod::ALL,
        };

        let mut product_count = 0;
        let mut ingredients = std::collections::BTreeSet::new();
        for period in periods {
            let routine = self.routines.load(*period).await?;
            product_count += routine.len();
            ingredients.extend(routine.ingredient_set());
        }

        let report = self.analyzer.analyze(&ingredients);
        Ok(RoutineAnalysis {
            period: query.period,
            product_count,
            ingredients: ingredients.into_iter().collect(),
            report,
        })
    }
}
