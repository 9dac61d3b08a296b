//! Catalog feed configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::adapters::catalog::FeedSources;

/// Optional feed files. Unset feeds use the built-in data.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    pub products_path: Option<PathBuf>,
    pub questions_path: Option<PathBuf>,
    pub skin_types_path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn feed_sources(&self) -> FeedSources {
        FeedSources {
            products: self.products_path.clone(),
            questions: self.questions_path.clone(),
            skin_types: self.skin_types_path.clone(),
        }
    }
}
