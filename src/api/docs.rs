//! OpenAPI documentation.

use crate::error::ErrorResponse;
use crate::models::{HealthResponse, MessageResponse, Stock, StockPatch};
use axum::Json;
use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_check,
        crate::api::handlers::list_stocks,
        crate::api::handlers::create_stock,
        crate::api::handlers::get_stock,
        crate::api::handlers::update_stock,
        crate::api::handlers::delete_stock,
    ),
    components(
        schemas(
            Stock,
            StockPatch,
            MessageResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Stocks", description = "Stock record management"),
    ),
    info(
        title = "Stocks API",
        version = "0.1.0",
        description = "CRUD REST API over the stocks table",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document as JSON.
pub fn docs_router() -> Router {
    Router::new().route(
        OPENAPI_PATH,
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
