//! Product records supplied by the catalog feed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::ProductId;
use crate::domain::ingredients::normalized_set;

/// A skincare product. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: u32,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Normalized ingredient names, deduplicated.
    pub fn ingredient_set(&self) -> BTreeSet<String> {
        normalized_set(&self.ingredients)
    }
}
