//! Static catalog adapter.
//!
//! Holds the product catalog, quiz schema and skin-type reference table in
//! memory. Feeds come from YAML or JSON files, or from the copies compiled
//! into the binary.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::domain::quiz::QuizQuestion;
use crate::domain::skin::SkinTypeInfo;
use crate::ports::{CatalogError, CatalogProvider, QuestionBank};

const BUILTIN_PRODUCTS: &str = include_str!("../../../data/products.yaml");
const BUILTIN_QUESTIONS: &str = include_str!("../../../data/quiz_questions.yaml");
const BUILTIN_SKIN_TYPES: &str = include_str!("../../../data/skin_types.yaml");

/// Encoding of a feed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Yaml,
    Json,
}

impl FeedFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FeedFormat::Json,
            _ => FeedFormat::Yaml,
        }
    }
}

/// Optional feed file locations. Missing entries use the built-in feed.
#[derive(Debug, Clone, Default)]
pub struct FeedSources {
    pub products: Option<PathBuf>,
    pub questions: Option<PathBuf>,
    pub skin_types: Option<PathBuf>,
}

#[derive(Debug)]
struct Feeds {
    products: Vec<Product>,
    questions: Vec<QuizQuestion>,
    skin_types: Vec<SkinTypeInfo>,
}

/// In-memory catalog and question bank.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    feeds: Arc<Feeds>,
}

impl StaticCatalog {
    /// Builds a catalog from already-parsed feeds.
    pub fn new(
        products: Vec<Product>,
        questions: Vec<QuizQuestion>,
        skin_types: Vec<SkinTypeInfo>,
    ) -> Result<Self, CatalogError> {
        check_unique_products(&products, "products")?;
        Ok(Self {
            feeds: Arc::new(Feeds {
                products,
                questions,
                skin_types,
            }),
        })
    }

    /// Catalog backed by the feeds compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            parse(BUILTIN_PRODUCTS, FeedFormat::Yaml, "builtin products")?,
            parse(BUILTIN_QUESTIONS, FeedFormat::Yaml, "builtin questions")?,
            parse(BUILTIN_SKIN_TYPES, FeedFormat::Yaml, "builtin skin types")?,
        )
    }

    /// Loads each configured feed from disk, falling back to the built-in
    /// copy for feeds that are not configured.
    pub async fn load(sources: &FeedSources) -> Result<Self, CatalogError> {
        let products: Vec<Product> = match &sources.products {
            Some(path) => read_feed(path).await?,
            None => parse(BUILTIN_PRODUCTS, FeedFormat::Yaml, "builtin products")?,
        };
        let questions: Vec<QuizQuestion> = match &sources.questions {
            Some(path) => read_feed(path).await?,
            None => parse(BUILTIN_QUESTIONS, FeedFormat::Yaml, "builtin questions")?,
        };
        let skin_types: Vec<SkinTypeInfo> = match &sources.skin_types {
            Some(path) => read_feed(path).await?,
            None => parse(BUILTIN_SKIN_TYPES, FeedFormat::Yaml, "builtin skin types")?,
        };

        tracing::info!(
            products = products.len(),
            questions = questions.len(),
            skin_types = skin_types.len(),
            "Catalog feeds loaded"
        );

        Self::new(products, questions, skin_types)
    }

    /// Skin-type reference table, available without going through the port.
    pub fn skin_type_table(&self) -> &[SkinTypeInfo] {
        &self.feeds.skin_types
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.feeds.products.clone())
    }
}

#[async_trait]
impl QuestionBank for StaticCatalog {
    async fn questions(&self) -> Result<Vec<QuizQuestion>, CatalogError> {
        Ok(self.feeds.questions.clone())
    }

    async fn skin_types(&self) -> Result<Vec<SkinTypeInfo>, CatalogError> {
        Ok(self.feeds.skin_types.clone())
    }
}

async fn read_feed<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let source_name = path.display().to_string();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::ReadFailed {
            source_name: source_name.clone(),
            reason: e.to_string(),
        })?;
    parse(&raw, FeedFormat::from_path(path), &source_name)
}

fn parse<T: DeserializeOwned>(
    raw: &str,
    format: FeedFormat,
    source_name: &str,
) -> Result<T, CatalogError> {
    let parsed = match format {
        FeedFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
        FeedFormat::Yaml => serde_yaml::from_str(raw).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| CatalogError::ParseFailed {
        source_name: source_name.to_string(),
        reason,
    })
}

fn check_unique_products(products: &[Product], source_name: &str) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.product_id.as_str()) {
            return Err(CatalogError::Invalid {
                source_name: source_name.to_string(),
                reason: format!("duplicate product_id '{}'", product.product_id),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures::product;
    use crate::domain::quiz::QuestionKind;
    use tempfile::TempDir;

    #[test]
    fn builtin_feeds_parse() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert!(!catalog.feeds.products.is_empty());
        assert_eq!(catalog.feeds.questions.first().map(|q| q.id.as_str()), Some("q1"));
        assert_eq!(catalog.skin_type_table().len(), 5);
    }

    #[test]
    fn builtin_quiz_has_one_multiple_choice_question() {
        let catalog = StaticCatalog::builtin().unwrap();
        let multiple = catalog
            .feeds
            .questions
            .iter()
            .filter(|q| q.kind == QuestionKind::Multiple)
            .count();
        assert_eq!(multiple, 1);
    }

    #[test]
    fn duplicate_product_ids_are_rejected() {
        let result = StaticCatalog::new(
            vec![product("p1", "Serum", "A", &[]), product("p1", "Toner", "B", &[])],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(CatalogError::Invalid { .. })));
    }

    #[test]
    fn feed_format_follows_extension() {
        assert_eq!(FeedFormat::from_path(Path::new("a/products.JSON")), FeedFormat::Json);
        assert_eq!(FeedFormat::from_path(Path::new("a/products.yml")), FeedFormat::Yaml);
        assert_eq!(FeedFormat::from_path(Path::new("products")), FeedFormat::Yaml);
    }

    #[tokio::test]
    async fn load_reads_json_products_and_keeps_builtin_questions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        let products = vec![product("x1", "Serum", "Acme", &["Retinol"])];
        std::fs::write(&path, serde_json::to_string(&products).unwrap()).unwrap();

        let catalog = StaticCatalog::load(&FeedSources {
            products: Some(path),
            ..FeedSources::default()
        })
        .await
        .unwrap();

        assert_eq!(catalog.products().await.unwrap(), products);
        assert!(!catalog.questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_feed_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let result = StaticCatalog::load(&FeedSources {
            questions: Some(dir.path().join("nope.yaml")),
            ..FeedSources::default()
        })
        .await;
        assert!(matches!(result, Err(CatalogError::ReadFailed { .. })));
    }

    #[tokio::test]
    async fn malformed_feed_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("skin_types.yaml");
        std::fs::write(&path, "- type: Waxy\n  description: nope\n").unwrap();

        let result = StaticCatalog::load(&FeedSources {
            skin_types: Some(path),
            ..FeedSources::default()
        })
        .await;
        assert!(matches!(result, Err(CatalogError::ParseFailed { .. })));
    }
}
