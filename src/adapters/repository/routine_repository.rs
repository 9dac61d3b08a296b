//! Key/value backed RoutineRepository.

use async_trait::async_trait;
use std::sync::Arc;

use super::json_value::{read_json, write_json};
use crate::domain::{
    foundation::DomainError,
    routine::{Routine, RoutinePeriod, RoutineSlot},
};
use crate::ports::{KeyValueStore, RoutineRepository, StateKey};

/// Stores each routine as a JSON array of slots under `routine-<period>`.
#[derive(Clone)]
pub struct KeyValueRoutineRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueRoutineRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RoutineRepository for KeyValueRoutineRepository {
    async fn load(&self, period: RoutinePeriod) -> Result<Routine, DomainError> {
        let slots: Option<Vec<RoutineSlot>> =
            read_json(self.store.as_ref(), StateKey::Routine(period)).await?;
        Ok(match slots {
            Some(slots) => Routine::from_slots(period, slots),
            None => Routine::empty(period),
        })
    }

    async fn save(&self, routine: &Routine) -> Result<(), DomainError> {
        write_json(
            self.store.as_ref(),
            StateKey::Routine(routine.period()),
            routine.slots(),
        )
        .await
    }

    async fn save_combined(&self, slots: &[RoutineSlot]) -> Result<(), DomainError> {
        write_json(self.store.as_ref(), StateKey::CombinedRoutine, slots).await
    }

    async fn load_combined(&self) -> Result<Vec<RoutineSlot>, DomainError> {
        let slots: Option<Vec<RoutineSlot>> =
            read_json(self.store.as_ref(), StateKey::CombinedRoutine).await?;
        Ok(slots.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::catalog::fixtures::product;
    use crate::domain::foundation::Timestamp;

    fn repo() -> (InMemoryKeyValueStore, KeyValueRoutineRepository) {
        let store = InMemoryKeyValueStore::new();
        let repo = KeyValueRoutineRepository::new(Arc::new(store.clone()));
        (store, repo)
    }

    #[tokio::test]
    async fn absent_routine_loads_empty() {
        let (_store, repo) = repo();
        let routine = repo.load(RoutinePeriod::Evening).await.unwrap();
        assert!(routine.is_empty());
        assert_eq!(routine.period(), RoutinePeriod::Evening);
    }

    #[tokio::test]
    async fn saved_routine_round_trips_in_order() {
        let (_store, repo) = repo();
        let mut routine = Routine::empty(RoutinePeriod::Morning);
        routine
            .add(product("p1", "Cleanser", "A", &["glycerin"]), Timestamp::now())
            .unwrap();
        routine
            .add(product("p2", "Serum", "B", &["niacinamide"]), Timestamp::now())
            .unwrap();

        repo.save(&routine).await.unwrap();
        let loaded = repo.load(RoutinePeriod::Morning).await.unwrap();

        let ids: Vec<&str> = loaded.slots().iter().map(|s| s.product_id().as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[tokio::test]
    async fn stored_slots_keep_flat_product_shape() {
        let (store, repo) = repo();
        let mut routine = Routine::empty(RoutinePeriod::Morning);
        routine
            .add(product("p1", "Cleanser", "A", &["glycerin"]), Timestamp::now())
            .unwrap();
        repo.save(&routine).await.unwrap();

        let raw = store.get("routine-morning").await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["product_id"], "p1");
        assert_eq!(json[0]["type"], "Cleanser");
        assert_eq!(json[0]["order"], 0);
        assert!(json[0]["addedAt"].is_string());
    }

    #[tokio::test]
    async fn corrupt_routine_loads_empty() {
        let (store, repo) = repo();
        store.set("routine-evening", "[{\"broken\":").await.unwrap();
        assert!(repo.load(RoutinePeriod::Evening).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn combined_routine_defaults_to_empty() {
        let (_store, repo) = repo();
        assert!(repo.load_combined().await.unwrap().is_empty());
    }
}
