//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers and routes. This module
//! assembles them under `/api` and applies the shared tower layers.

pub mod advisor;
pub mod error;
pub mod routine;

pub use advisor::{advisor_routes, AdvisorHandlers};
pub use error::ErrorResponse;
pub use routine::{routine_routes, RoutineHandlers};

use axum::{http::HeaderValue, routing::get, Router};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::Application;

/// Settings the router needs from configuration.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub default_top_n: usize,
    pub verbose_errors: bool,
    pub enable_tracing: bool,
    pub request_timeout: Duration,
    /// Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            default_top_n: crate::ports::DEFAULT_TOP_N,
            verbose_errors: false,
            enable_tracing: true,
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Builds the full application router.
pub fn api_router(app: &Application, settings: &HttpSettings) -> Router {
    let advisor = advisor_routes(AdvisorHandlers::new(
        app,
        settings.default_top_n,
        settings.verbose_errors,
    ));
    let routines = routine_routes(RoutineHandlers::new(app, settings.verbose_errors));

    let mut router = Router::new()
        .route("/health", get(health))
        .nest("/api", advisor.nest("/routines", routines))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins));

    if settings.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}
