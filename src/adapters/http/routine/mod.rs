//! HTTP adapter for the routine builder endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddToRoutineRequest, MoveRequest};
pub use handlers::RoutineHandlers;
pub use routes::routine_routes;
