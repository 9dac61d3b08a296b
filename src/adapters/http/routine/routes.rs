//! HTTP routes for routine endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    add_to_routine, analyze_all_routines, analyze_routine, list_routines, move_in_routine,
    remove_from_routine, save_routines, RoutineHandlers,
};

/// Creates the routine router. Mounted under `/api/routines`.
pub fn routine_routes(handlers: RoutineHandlers) -> Router {
    Router::new()
        .route("/", get(list_routines))
        .route("/save", post(save_routines))
        .route("/analysis", get(analyze_all_routines))
        .route("/:period", post(add_to_routine))
        .route("/:period/analysis", get(analyze_routine))
        .route("/:period/:product_id", delete(remove_from_routine))
        .route("/:period/:product_id/move", post(move_in_routine))
        .with_state(handlers)
}
