//! RoutineComposer - Command handler for routine mutations.
//!
//! Every mutation is a read-modify-write of one routine followed by a
//! rewrite of the combined routine. The whole cycle runs under a single
//! async mutex so concurrent callers never interleave.
//!
//! Write order per mutation: `routine-<period>` once, then
//! `legacy-combined-routine` once.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, ProductId, Timestamp};
use crate::domain::routine::{combined_slots, MoveDirection, Routine, RoutinePeriod, RoutineSlot};
use crate::ports::{CatalogProvider, RoutineRepository};

#[derive(Debug, Clone)]
pub struct AddToRoutineCommand {
    pub period: RoutinePeriod,
    pub product_id: ProductId,
}

#[derive(Debug, Clone)]
pub struct RemoveFromRoutineCommand {
    pub period: RoutinePeriod,
    pub product_id: ProductId,
}

#[derive(Debug, Clone)]
pub struct MoveInRoutineCommand {
    pub period: RoutinePeriod,
    pub product_id: ProductId,
    pub direction: MoveDirection,
}

/// Both routines as displayed to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutinesView {
    pub morning: Vec<RoutineSlot>,
    pub evening: Vec<RoutineSlot>,
}

impl RoutinesView {
    fn from_routines(morning: Routine, evening: Routine) -> Self {
        Self {
            morning: morning.into_slots(),
            evening: evening.into_slots(),
        }
    }

    pub fn get(&self, period: RoutinePeriod) -> &[RoutineSlot] {
        match period {
            RoutinePeriod::Morning => &self.morning,
            RoutinePeriod::Evening => &self.evening,
        }
    }
}

pub struct RoutineComposer {
    routines: Arc<dyn RoutineRepository>,
    catalog: Arc<dyn CatalogProvider>,
    lock: Mutex<()>,
}

impl RoutineComposer {
    pub fn new(routines: Arc<dyn RoutineRepository>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            routines,
            catalog,
            lock: Mutex::new(()),
        }
    }

    /// Current morning and evening routines.
    pub async fn routines(&self) -> Result<RoutinesView, DomainError> {
        let _guard = self.lock.lock().await;
        let (morning, evening) = self.load_both().await?;
        Ok(RoutinesView::from_routines(morning, evening))
    }

    /// Appends a catalog product to a routine.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if the id is not in the catalog
    /// - `DuplicateRoutineItem` if the product is already in that routine
    pub async fn add(&self, cmd: AddToRoutineCommand) -> Result<RoutinesView, DomainError> {
        let product = self
            .catalog
            .products()
            .await?
            .into_iter()
            .find(|p| p.product_id == cmd.product_id)
            .ok_or_else(|| DomainError::product_not_found(&cmd.product_id))?;

        let _guard = self.lock.lock().await;
        let (mut morning, mut evening) = self.load_both().await?;
        let routine = select_mut(cmd.period, &mut morning, &mut evening);
        routine.add(product, Timestamp::now())?;

        self.persist(cmd.period, &morning, &evening).await?;
        tracing::info!(period = %cmd.period, product_id = %cmd.product_id, "Product added to routine");
        Ok(RoutinesView::from_routines(morning, evening))
    }

    /// Removes a product and renumbers the remaining slots.
    pub async fn remove(&self, cmd: RemoveFromRoutineCommand) -> Result<RoutinesView, DomainError> {
        let _guard = self.lock.lock().await;
        let (mut morning, mut evening) = self.load_both().await?;
        select_mut(cmd.period, &mut morning, &mut evening).remove(&cmd.product_id)?;

        self.persist(cmd.period, &morning, &evening).await?;
        tracing::info!(period = %cmd.period, product_id = %cmd.product_id, "Product removed from routine");
        Ok(RoutinesView::from_routines(morning, evening))
    }

    /// Swaps a product with its neighbour. A move past either end changes
    /// nothing and writes nothing.
    pub async fn move_product(&self, cmd: MoveInRoutineCommand) -> Result<RoutinesView, DomainError> {
        let _guard = self.lock.lock().await;
        let (mut morning, mut evening) = self.load_both().await?;
        let moved = select_mut(cmd.period, &mut morning, &mut evening)
            .move_slot(&cmd.product_id, cmd.direction)?;

        if moved {
            self.persist(cmd.period, &morning, &evening).await?;
        } else {
            tracing::debug!(
                period = %cmd.period,
                product_id = %cmd.product_id,
                direction = ?cmd.direction,
                "Move at routine boundary ignored"
            );
        }
        Ok(RoutinesView::from_routines(morning, evening))
    }

    /// Rewrites the combined routine from the stored morning and evening routines.
    pub async fn save(&self) -> Result<Vec<RoutineSlot>, DomainError> {
        let _guard = self.lock.lock().await;
        let (morning, evening) = self.load_both().await?;
        let combined = combined_slots(&morning, &evening);
        self.routines.save_combined(&combined).await?;
        tracing::info!(steps = combined.len(), "Combined routine saved");
        Ok(combined)
    }

    async fn load_both(&self) -> Result<(Routine, Routine), DomainError> {
        let morning = self.routines.load(RoutinePeriod::Morning).await?;
        let evening = self.routines.load(RoutinePeriod::Evening).await?;
        Ok((morning, evening))
    }

    async fn persist(
        &self,
        changed: RoutinePeriod,
        morning: &Routine,
        evening: &Routine,
    ) -> Result<(), DomainError> {
        let routine = match changed {
            RoutinePeriod::Morning => morning,
            RoutinePeriod::Evening => evening,
        };
        self.routines.save(routine).await?;
        self.routines
            .save_combined(&combined_slots(morning, evening))
            .await
    }
}

fn select_mut<'a>(
    period: RoutinePeriod,
    morning: &'a mut Routine,
    evening: &'a mut Routine,
) -> &'a mut Routine {
    match period {
        RoutinePeriod::Morning => morning,
        RoutinePeriod::Evening => evening,
    }
}
