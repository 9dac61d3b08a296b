//! GetDashboardOverviewHandler - Query handler for the dashboard summary.
//!
//! Aggregates the stored profile, both routines and the combined routine.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::ingredients::normalized_set;
use crate::domain::routine::RoutinePeriod;
use crate::domain::skin::SkinProfile;
use crate::ports::{ProfileRepository, RoutineRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutineCounts {
    pub morning: usize,
    pub evening: usize,
    pub total: usize,
}

/// Summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub profile: Option<SkinProfile>,
    pub routine_counts: RoutineCounts,
    /// Distinct normalized ingredients in the combined routine.
    pub distinct_ingredients: usize,
}

pub struct GetDashboardOverviewHandler {
    profiles: Arc<dyn ProfileRepository>,
    routines: Arc<dyn RoutineRepository>,
}

impl GetDashboardOverviewHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, routines: Arc<dyn RoutineRepository>) -> Self {
        Self { profiles, routines }
    }

    pub async fn handle(&self) -> Result<DashboardOverview, DomainError> {
        let profile = self.profiles.current().await?;
        let morning = self.routines.load(RoutinePeriod::Morning).await?;
        let evening = self.routines.load(RoutinePeriod::Evening).await?;

        let combined = self.routines.load_combined().await?;
        let ingredients = normalized_set(
            combined
                .iter()
                .flat_map(|slot| slot.product.ingredients.iter()),
        );

        Ok(DashboardOverview {
            profile,
            routine_counts: RoutineCounts {
                morning: morning.len(),
                evening: evening.len(),
                total: morning.len() + evening.len(),
            },
            distinct_ingredients: ingredients.len(),
        })
    }
}
