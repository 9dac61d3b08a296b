//! Request DTOs for routine endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::routine::MoveDirection;

/// Body of `POST /routines/:period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToRoutineRequest {
    pub product_id: String,
}

/// Body of `POST /routines/:period/:product_id/move`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRequest {
    pub direction: MoveDirection,
}
