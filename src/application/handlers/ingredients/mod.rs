//! Ingredient analysis handlers.

mod analyze_ingredients;
mod analyze_routine;

pub use analyze_ingredients::{AnalyzeIngredientsCommand, AnalyzeIngredientsHandler};
pub use analyze_routine::{AnalyzeRoutineHandler, AnalyzeRoutineQuery, RoutineAnalysis};
