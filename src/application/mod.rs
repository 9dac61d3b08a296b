//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write through the repositories; query handlers only read.

pub mod handlers;
mod local_service;
mod request_tracker;

pub use local_service::{Application, ApplicationDependencies, LocalSkincareService};
pub use request_tracker::{RequestTicket, RequestTracker};
