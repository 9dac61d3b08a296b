//! Recommendation Engine - ranks catalog products against a seed.
//!
//! # Scoring
//!
//! - Product seed: Jaccard similarity of normalized ingredient sets.
//!   The seed itself is never recommended.
//! - Profile seed: share of the skin type's ingredient affinities that the
//!   candidate contains.
//!
//! Results are sorted by descending score; equal scores keep catalog order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::similarity::{coverage, jaccard};
use crate::domain::catalog::Product;
use crate::domain::foundation::{DomainError, Fraction, ProductId, ValidationError};
use crate::domain::ingredients::normalize_ingredient;
use crate::domain::skin::{SkinProfile, SkinType};

/// How many shared ingredients a reason names at most.
const REASON_INGREDIENTS: usize = 2;

/// What a recommendation request is anchored to.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationSeed {
    Product(ProductId),
    Profile(SkinProfile),
}

/// One ranked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub product: Product,
    pub score: Fraction,
    #[serde(rename = "match_reason")]
    pub reason: String,
}

/// Ranked recommendations, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<SkinType>,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationResult {
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Stateless ranking service.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Ranks `catalog` against `seed`, returning at most `top_n` entries.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when `top_n` is zero
    /// - `ProductNotFound` when a product seed is absent from a non-empty catalog
    pub fn recommend(
        &self,
        seed: &RecommendationSeed,
        catalog: &[Product],
        top_n: usize,
    ) -> Result<RecommendationResult, DomainError> {
        if top_n == 0 {
            return Err(ValidationError::invalid_format("top_n", "must be a positive integer").into());
        }

        let (mut ranked, product_id, skin_type) = match seed {
            RecommendationSeed::Product(id) => {
                if catalog.is_empty() {
                    (Vec::new(), Some(id.clone()), None)
                } else {
                    (rank_by_product(id, catalog)?, Some(id.clone()), None)
                }
            }
            RecommendationSeed::Profile(profile) => (
                rank_by_profile(profile.skin_type, catalog),
                None,
                Some(profile.skin_type),
            ),
        };

        // Stable: ties keep catalog order.
        ranked.sort_by(|a, b| b.score.value().total_cmp(&a.score.value()));
        ranked.truncate(top_n);

        Ok(RecommendationResult {
            product_id,
            skin_type,
            recommendations: ranked,
        })
    }
}

fn rank_by_product(
    seed_id: &ProductId,
    catalog: &[Product],
) -> Result<Vec<Recommendation>, DomainError> {
    let seed = catalog
        .iter()
        .find(|p| &p.product_id == seed_id)
        .ok_or_else(|| DomainError::product_not_found(seed_id))?;
    let seed_set = seed.ingredient_set();

    Ok(catalog
        .iter()
        .filter(|p| &p.product_id != seed_id)
        .map(|candidate| {
            let candidate_set = candidate.ingredient_set();
            let shared = ordered_matches(candidate, |name| seed_set.contains(name));
            let reason = if !shared.is_empty() {
                format!("Similar ingredients: {}", shared.join(", "))
            } else if candidate.product_type.eq_ignore_ascii_case(&seed.product_type) {
                format!("Another {}", candidate.product_type.to_lowercase())
            } else {
                "No shared ingredients".to_string()
            };
            Recommendation {
                product: candidate.clone(),
                score: jaccard(&seed_set, &candidate_set),
                reason,
            }
        })
        .collect())
}

fn rank_by_profile(skin_type: SkinType, catalog: &[Product]) -> Vec<Recommendation> {
    let affinities = skin_type.ingredient_affinities();

    catalog
        .iter()
        .map(|candidate| {
            let present = candidate.ingredient_set();
            let matched: Vec<&str> = affinities
                .iter()
                .copied()
                .filter(|a| present.contains(*a))
                .take(REASON_INGREDIENTS)
                .collect();
            let reason = if matched.is_empty() {
                format!("General pick for {} skin", skin_type)
            } else {
                format!("Recommended for {} skin: {}", skin_type, matched.join(", "))
            };
            Recommendation {
                product: candidate.clone(),
                score: coverage(affinities, &present),
                reason,
            }
        })
        .collect()
}

/// Candidate ingredients (normalized, in label order) accepted by `keep`,
/// deduplicated and capped for use in a reason.
fn ordered_matches(candidate: &Product, keep: impl Fn(&str) -> bool) -> Vec<String> {
    let mut seen = BTreeSet::new();
    candidate
        .ingredients
        .iter()
        .filter_map(|i| normalize_ingredient(i))
        .filter(|name| keep(name) && seen.insert(name.clone()))
        .take(REASON_INGREDIENTS)
        .collect()
}
