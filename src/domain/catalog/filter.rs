//! Catalog browsing filters.

use serde::Deserialize;
use std::collections::BTreeSet;

use super::Product;

/// Optional criteria for narrowing the catalog. Empty criteria are ignored;
/// other values are matched as given, whitespace included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive exact match on the product type.
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
    /// Case-insensitive substring match on the brand.
    #[serde(default)]
    pub brand: Option<String>,
    /// Case-insensitive substring match on name, brand or any ingredient.
    #[serde(default)]
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(wanted) = criterion(&self.product_type) {
            if product.product_type.to_lowercase() != wanted {
                return false;
            }
        }
        if let Some(wanted) = criterion(&self.brand) {
            if !product.brand.to_lowercase().contains(&wanted) {
                return false;
            }
        }
        if let Some(term) = criterion(&self.search) {
            let hit = product.name.to_lowercase().contains(&term)
                || product.brand.to_lowercase().contains(&term)
                || product
                    .ingredients
                    .iter()
                    .any(|i| i.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Matching products in catalog order.
    pub fn apply(&self, catalog: &[Product]) -> Vec<Product> {
        catalog.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

fn criterion(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

/// Distinct brand names, sorted.
pub fn distinct_brands(catalog: &[Product]) -> Vec<String> {
    catalog
        .iter()
        .map(|p| p.brand.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
