//! HTTP handlers for routine endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::{
    AddToRoutineCommand, AnalyzeRoutineHandler, AnalyzeRoutineQuery, MoveInRoutineCommand,
    RemoveFromRoutineCommand, RoutineComposer,
};
use crate::application::Application;
use crate::domain::foundation::{DomainError, ProductId};
use crate::domain::routine::RoutinePeriod;

use super::dto::{AddToRoutineRequest, MoveRequest};

#[derive(Clone)]
pub struct RoutineHandlers {
    composer: Arc<RoutineComposer>,
    analyze_routine: Arc<AnalyzeRoutineHandler>,
    verbose_errors: bool,
}

impl RoutineHandlers {
    pub fn new(app: &Application, verbose_errors: bool) -> Self {
        Self {
            composer: app.composer.clone(),
            analyze_routine: app.analyze_routine.clone(),
            verbose_errors,
        }
    }

    fn error(&self, error: DomainError) -> Response {
        domain_error_response(error, self.verbose_errors)
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
}

fn parse_period(raw: &str) -> Result<RoutinePeriod, Response> {
    raw.parse::<RoutinePeriod>()
        .map_err(|e| bad_request(e.to_string()))
}

fn parse_product_id(raw: &str) -> Result<ProductId, Response> {
    ProductId::new(raw).map_err(|e| bad_request(e.to_string()))
}

/// GET /api/routines - Both routines
pub async fn list_routines(State(handlers): State<RoutineHandlers>) -> Response {
    match handlers.composer.routines().await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/routines/:period - Append a product
pub async fn add_to_routine(
    State(handlers): State<RoutineHandlers>,
    Path(period): Path<String>,
    Json(req): Json<AddToRoutineRequest>,
) -> Response {
    let (period, product_id) = match (parse_period(&period), parse_product_id(&req.product_id)) {
        (Ok(period), Ok(id)) => (period, id),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    match handlers
        .composer
        .add(AddToRoutineCommand { period, product_id })
        .await
    {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// DELETE /api/routines/:period/:product_id - Remove a product
pub async fn remove_from_routine(
    State(handlers): State<RoutineHandlers>,
    Path((period, product_id)): Path<(String, String)>,
) -> Response {
    let (period, product_id) = match (parse_period(&period), parse_product_id(&product_id)) {
        (Ok(period), Ok(id)) => (period, id),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    match handlers
        .composer
        .remove(RemoveFromRoutineCommand { period, product_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/routines/:period/:product_id/move - Move a product up or down
pub async fn move_in_routine(
    State(handlers): State<RoutineHandlers>,
    Path((period, product_id)): Path<(String, String)>,
    Json(req): Json<MoveRequest>,
) -> Response {
    let (period, product_id) = match (parse_period(&period), parse_product_id(&product_id)) {
        (Ok(period), Ok(id)) => (period, id),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    let cmd = MoveInRoutineCommand {
        period,
        product_id,
        direction: req.direction,
    };
    match handlers.composer.move_product(cmd).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/routines/save - Rewrite the combined routine
pub async fn save_routines(State(handlers): State<RoutineHandlers>) -> Response {
    match handlers.composer.save().await {
        Ok(combined) => (StatusCode::OK, Json(combined)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/routines/:period/analysis - Conflicts within one routine
pub async fn analyze_routine(
    State(handlers): State<RoutineHandlers>,
    Path(period): Path<String>,
) -> Response {
    let period = match parse_period(&period) {
        Ok(period) => period,
        Err(response) => return response,
    };
    let query = AnalyzeRoutineQuery {
        period: Some(period),
    };
    match handlers.analyze_routine.handle(query).await {
        Ok(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/routines/analysis - Conflicts across both routines
pub async fn analyze_all_routines(State(handlers): State<RoutineHandlers>) -> Response {
    match handlers
        .analyze_routine
        .handle(AnalyzeRoutineQuery::default())
        .await
    {
        Ok(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
        Err(e) => handlers.error(e),
    }
}
