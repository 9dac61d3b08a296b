//! Routine aggregate - an ordered, time-of-day scoped list of products.
//!
//! # Invariants
//!
//! - No product appears twice.
//! - Slot `order` values are exactly `0..len`, matching slot position.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use super::RoutineError;
use crate::domain::catalog::Product;
use crate::domain::foundation::{ProductId, Timestamp, ValidationError};

/// Time of day a routine is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutinePeriod {
    Morning,
    Evening,
}

impl RoutinePeriod {
    pub const ALL: [RoutinePeriod; 2] = [RoutinePeriod::Morning, RoutinePeriod::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutinePeriod::Morning => "morning",
            RoutinePeriod::Evening => "evening",
        }
    }
}

impl fmt::Display for RoutinePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutinePeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(RoutinePeriod::Morning),
            "evening" => Ok(RoutinePeriod::Evening),
            other => Err(ValidationError::invalid_format(
                "routine",
                format!("expected 'morning' or 'evening', got '{}'", other),
            )),
        }
    }
}

/// Direction for [`Routine::move_slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Coarse lifecycle of a routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineState {
    Empty,
    Populated,
}

/// A product placed at a position in a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineSlot {
    #[serde(flatten)]
    pub product: Product,
    pub order: usize,
    #[serde(rename = "addedAt")]
    pub added_at: Timestamp,
}

impl RoutineSlot {
    pub fn product_id(&self) -> &ProductId {
        &self.product.product_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    period: RoutinePeriod,
    slots: Vec<RoutineSlot>,
}

impl Routine {
    pub fn empty(period: RoutinePeriod) -> Self {
        Self {
            period,
            slots: Vec::new(),
        }
    }

    /// Rebuilds a routine from stored slots, restoring the invariants:
    /// slots are sorted by their stored order, later duplicates are dropped
    /// and orders are renumbered from zero.
    pub fn from_slots(period: RoutinePeriod, mut slots: Vec<RoutineSlot>) -> Self {
        slots.sort_by_key(|s| s.order);
        let mut seen = HashSet::new();
        slots.retain(|s| seen.insert(s.product_id().clone()));
        let mut routine = Self { period, slots };
        routine.renumber();
        routine
    }

    pub fn period(&self) -> RoutinePeriod {
        self.period
    }

    pub fn slots(&self) -> &[RoutineSlot] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<RoutineSlot> {
        self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn state(&self) -> RoutineState {
        if self.slots.is_empty() {
            RoutineState::Empty
        } else {
            RoutineState::Populated
        }
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Appends `product` as the last step.
    pub fn add(&mut self, product: Product, added_at: Timestamp) -> Result<&RoutineSlot, RoutineError> {
        if self.contains(&product.product_id) {
            return Err(RoutineError::Duplicate {
                period: self.period,
                product_id: product.product_id,
            });
        }
        self.slots.push(RoutineSlot {
            product,
            order: self.slots.len(),
            added_at,
        });
        Ok(&self.slots[self.slots.len() - 1])
    }

    /// Removes a product and closes the gap in the ordering.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<RoutineSlot, RoutineError> {
        let index = self.require_position(product_id)?;
        let removed = self.slots.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Swaps a product with its neighbour. Returns `false` without changing
    /// anything when the product is already at that boundary.
    pub fn move_slot(
        &mut self,
        product_id: &ProductId,
        direction: MoveDirection,
    ) -> Result<bool, RoutineError> {
        let index = self.require_position(product_id)?;
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.slots.len() => index + 1,
            _ => return Ok(false),
        };
        self.slots.swap(index, target);
        self.renumber();
        Ok(true)
    }

    /// Union of the normalized ingredients of every product in the routine.
    pub fn ingredient_set(&self) -> BTreeSet<String> {
        self.slots
            .iter()
            .flat_map(|s| s.product.ingredient_set())
            .collect()
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.slots.iter().position(|s| s.product_id() == product_id)
    }

    fn require_position(&self, product_id: &ProductId) -> Result<usize, RoutineError> {
        self.position(product_id).ok_or_else(|| RoutineError::NotInRoutine {
            period: self.period,
            product_id: product_id.clone(),
        })
    }

    fn renumber(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.order = i;
        }
    }
}

/// Morning slots followed by evening slots, as kept under the combined key.
pub fn combined_slots(morning: &Routine, evening: &Routine) -> Vec<RoutineSlot> {
    morning
        .slots()
        .iter()
        .chain(evening.slots())
        .cloned()
        .collect()
}
