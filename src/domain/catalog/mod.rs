//! Catalog module - products and browsing filters.

mod filter;
mod product;

pub use filter::{distinct_brands, ProductFilter};
pub use product::Product;

#[cfg(test)]
pub(crate) use product::fixtures;
