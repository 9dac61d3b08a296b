//! Startup wiring from configuration to a ready application.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::http::HttpSettings;
use crate::adapters::{
    FileKeyValueStore, InMemoryKeyValueStore, KeyValueProfileRepository,
    KeyValueRoutineRepository, StaticCatalog,
};
use crate::application::{Application, ApplicationDependencies};
use crate::config::{AppConfig, StorageBackend, ValidationError};
use crate::ports::{CatalogError, KeyValueStore};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

/// Builds the key/value store selected by `storage.backend`.
pub fn build_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match config.storage.backend {
        StorageBackend::File => {
            tracing::info!(data_dir = %config.storage.data_dir.display(), "Using file storage");
            Arc::new(FileKeyValueStore::new(&config.storage.data_dir))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}

/// Loads feeds and wires every handler over `store`.
pub async fn build_application(
    config: &AppConfig,
    store: Arc<dyn KeyValueStore>,
) -> Result<Application, StartupError> {
    config.validate()?;
    let catalog = Arc::new(StaticCatalog::load(&config.catalog.feed_sources()).await?);

    Ok(Application::new(ApplicationDependencies {
        profiles: Arc::new(KeyValueProfileRepository::new(store.clone())),
        routines: Arc::new(KeyValueRoutineRepository::new(store)),
        catalog: catalog.clone(),
        question_bank: catalog,
        limits: config.recommendation.limits(),
        primary_question: config.inference.primary_question_id()?,
    }))
}

pub fn http_settings(config: &AppConfig) -> HttpSettings {
    HttpSettings {
        default_top_n: config.recommendation.default_top_n,
        verbose_errors: config.features.verbose_errors,
        enable_tracing: config.features.enable_tracing,
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn default_config_with_memory_store_builds() {
        let config = AppConfig::default();
        let app = build_application(&config, Arc::new(InMemoryKeyValueStore::new()))
            .await
            .unwrap();
        assert!(!app.service.get_quiz_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_config_is_rejected_before_loading_feeds() {
        let mut config = AppConfig::default();
        config.recommendation.default_top_n = 0;
        let result = build_application(&config, Arc::new(InMemoryKeyValueStore::new())).await;
        assert!(matches!(result, Err(StartupError::Config(_))));
    }

    #[test]
    fn http_settings_follow_config() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 7;
        config.features.verbose_errors = true;
        let settings = http_settings(&config);
        assert_eq!(settings.request_timeout, Duration::from_secs(7));
        assert!(settings.verbose_errors);
    }
}
