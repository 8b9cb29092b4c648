//! Read-only catalog endpoints: static fixtures plus the derived price feed.

use axum::{extract::State, Json};
use serde::Serialize;

use steelseek_core::{price_quotes, Hub, PriceQuote, Product, Warehouse};

use super::AppState;

#[derive(Debug, Serialize)]
pub(super) struct HubsResponse {
    success: bool,
    hubs: Vec<Hub>,
}

pub(super) async fn list_hubs(State(state): State<AppState>) -> Json<HubsResponse> {
    Json(HubsResponse {
        success: true,
        hubs: state.catalog.hubs.clone(),
    })
}

pub(super) async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products.clone())
}

/// Quotes are derived per request so the date stamp is always current; the
/// underlying price table itself is static.
pub(super) async fn list_prices(State(state): State<AppState>) -> Json<Vec<PriceQuote>> {
    let today = chrono::Utc::now().date_naive();
    Json(price_quotes(&state.catalog, today))
}

pub(super) async fn list_warehouses(State(state): State<AppState>) -> Json<Vec<Warehouse>> {
    Json(state.catalog.warehouses.clone())
}
