//! API request handlers.
//!
//! Each stock handler runs the same sequence: decode the request, build a
//! [`Statement`](crate::db::Statement), execute it against the pool, and encode
//! the result. A failure at any step ends the request with an [`ApiError`].

use crate::db::queries;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{HealthResponse, MessageResponse, Stock, StockPatch};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(test)]
mod tests;

/// Parses the `{id}` path segment as a stock id.
fn parse_stock_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidRequest(format!("stock id must be an integer: {}", raw)))
}

fn trace_statement(operation: &'static str, stmt: &crate::db::Statement) {
    debug!(operation, sql = stmt.sql(), params = ?stmt.params(), "built statement");
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = ErrorResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    state.db.ping().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// ============================================================================
// Stocks
// ============================================================================

/// List all stocks.
#[utoipa::path(
    get,
    path = "/api/stock",
    responses(
        (status = 200, description = "All stocks, empty array when none", body = Vec<Stock>),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "Stocks"
)]
pub async fn list_stocks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Stock>>, ApiError> {
    let stmt = queries::select_all()?;
    trace_statement("list_stocks", &stmt);

    let stocks = stmt.query_as::<Stock>().fetch_all(state.db.pool()).await?;

    Ok(Json(stocks))
}

/// Create a stock with a caller-supplied id.
#[utoipa::path(
    post,
    path = "/api/stock",
    request_body = Stock,
    responses(
        (status = 200, description = "Stock created", body = MessageResponse),
        (status = 400, description = "Malformed payload", body = ErrorResponse),
        (status = 500, description = "Insert failed", body = ErrorResponse)
    ),
    tag = "Stocks"
)]
pub async fn create_stock(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Stock>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(stock) = payload?;

    let stmt = queries::insert(&stock)?;
    trace_statement("create_stock", &stmt);

    stmt.query().execute(state.db.pool()).await?;
    info!(id = stock.id, "Created stock");

    Ok(Json(MessageResponse::successful()))
}

/// Get a stock by id.
#[utoipa::path(
    get,
    path = "/api/stock/{id}",
    params(
        ("id" = i64, Path, description = "Stock id")
    ),
    responses(
        (status = 200, description = "Stock found", body = Stock),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Stock not found", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "Stocks"
)]
pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Stock>, ApiError> {
    let id = parse_stock_id(&id)?;

    let stmt = queries::select_by_id(id)?;
    trace_statement("get_stock", &stmt);

    let stock = stmt
        .query_as::<Stock>()
        .fetch_optional(state.db.pool())
        .await?
        .ok_or(ApiError::StockNotFound(id))?;

    Ok(Json(stock))
}

/// Update the supplied fields of a stock.
///
/// Empty strings and a zero price leave the column untouched. A body that
/// sets nothing is rejected.
#[utoipa::path(
    put,
    path = "/api/stock/{id}",
    params(
        ("id" = i64, Path, description = "Stock id")
    ),
    request_body = StockPatch,
    responses(
        (status = 200, description = "Stock updated", body = MessageResponse),
        (status = 400, description = "Bad id, malformed payload or nothing to update", body = ErrorResponse),
        (status = 500, description = "Update failed", body = ErrorResponse)
    ),
    tag = "Stocks"
)]
pub async fn update_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<StockPatch>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_stock_id(&id)?;
    let Json(patch) = payload?;

    if patch.is_empty() {
        return Err(ApiError::InvalidRequest(
            "at least one of name, price or company must be set".to_string(),
        ));
    }

    let stmt = queries::update_by_id(id, &patch)?;
    trace_statement("update_stock", &stmt);

    let result = stmt.query().execute(state.db.pool()).await?;
    if result.rows_affected() == 0 {
        debug!(id, "Update matched no stock");
    } else {
        info!(id, "Updated stock");
    }

    Ok(Json(MessageResponse::successful()))
}

/// Delete a stock by id.
#[utoipa::path(
    delete,
    path = "/api/stock/{id}",
    params(
        ("id" = i64, Path, description = "Stock id")
    ),
    responses(
        (status = 200, description = "Stock deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse)
    ),
    tag = "Stocks"
)]
pub async fn delete_stock(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_stock_id(&id)?;

    let stmt = queries::delete_by_id(id)?;
    trace_statement("delete_stock", &stmt);

    let result = stmt.query().execute(state.db.pool()).await?;
    if result.rows_affected() == 0 {
        debug!(id, "Delete matched no stock");
    } else {
        info!(id, "Deleted stock");
    }

    Ok(Json(MessageResponse::successful()))
}
