//! Product browsing queries.

use std::sync::Arc;

use crate::domain::catalog::{distinct_brands, Product, ProductFilter};
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::CatalogProvider;

/// Query for catalog products matching a filter.
#[derive(Debug, Clone, Default)]
pub struct GetProductsQuery {
    pub filter: ProductFilter,
}

/// Handler returning filtered products in catalog order.
pub struct GetProductsHandler {
    catalog: Arc<dyn CatalogProvider>,
}

impl GetProductsHandler {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetProductsQuery) -> Result<Vec<Product>, DomainError> {
        let products = self.catalog.products().await?;
        let matched = query.filter.apply(&products);
        tracing::debug!(
            total = products.len(),
            matched = matched.len(),
            "Catalog filtered"
        );
        Ok(matched)
    }
}

/// Query for one product by id.
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub product_id: ProductId,
}

pub struct GetProductHandler {
    catalog: Arc<dyn CatalogProvider>,
}

impl GetProductHandler {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetProductQuery) -> Result<Product, DomainError> {
        self.catalog
            .products()
            .await?
            .into_iter()
            .find(|p| p.product_id == query.product_id)
            .ok_or_else(|| DomainError::product_not_found(&query.product_id))
    }
}

/// Lists distinct brands, sorted.
pub struct ListBrandsHandler {
    catalog: Arc<dyn CatalogProvider>,
}

impl ListBrandsHandler {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<String>, DomainError> {
        Ok(distinct_brands(&self.catalog.products().await?))
    }
}
