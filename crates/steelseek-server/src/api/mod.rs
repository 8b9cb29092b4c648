mod catalog;
mod search;

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::middleware::request_id;

pub use search::SearchFetcher;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<steelseek_core::Catalog>,
    pub fetcher: SearchFetcher,
}

/// Error body returned to clients: `{"success":false,"error":{...}}`,
/// matching the response idiom of the rest of the API.
#[derive(Debug, Serialize)]
pub struct ApiError {
    success: bool,
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    service: &'static str,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("validation_error", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

/// Assemble the full application router.
///
/// API routes are fixed; anything else falls through to the static bundle
/// under `static_dir`, with `index.html` served for unknown paths so
/// client-side routing keeps working after a hard refresh.
pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    let spa_index = ServeFile::new(static_dir.join("index.html"));
    let static_service = ServeDir::new(static_dir).not_found_service(spa_index);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/sellers/search", post(search::search_sellers))
        .route("/api/hubs", get(catalog::list_hubs))
        .route("/api/products", get(catalog::list_products))
        .route("/api/prices", get(catalog::list_prices))
        .route("/api/warehouses", get(catalog::list_warehouses))
        .fallback_service(static_service)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData {
        status: "ok",
        service: "steel-scraper",
    })
}
