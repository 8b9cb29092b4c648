//! The seller-search endpoint: geocode, rank fixtures, enrich with
//! best-effort scraped candidates, and return one sorted list.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use steelseek_core::{geocode, rank_known_sellers, rank_scraped_candidate, sort_by_match_score, RankedSeller};
use steelseek_scraper::{ScrapedCandidate, SearchClient};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

const DEFAULT_PRODUCT: &str = "میلگرد";
const DEFAULT_LOCATION: &str = "Tehran";
const DEFAULT_QUANTITY_TONS: f64 = 10.0;

/// Fixed phrase appended between product and location when querying the
/// search engine.
const SELLER_QUERY_PHRASE: &str = "فروشنده آهن";

/// How many scraped candidates are merged into the response. The fetcher
/// may return more; the tail is discarded.
const SCRAPED_CONSUMED: usize = 3;

/// The external enrichment step, either a live search client or a no-op.
///
/// Every failure mode — timeout, network error, bad status, markup
/// mismatch — degrades to an empty candidate list. A fetch problem must
/// never fail the search request itself.
#[derive(Clone)]
pub enum SearchFetcher {
    Web {
        client: Arc<SearchClient>,
        timeout: Duration,
    },
    Disabled,
}

impl SearchFetcher {
    #[must_use]
    pub fn web(client: SearchClient, timeout: Duration) -> Self {
        Self::Web {
            client: Arc::new(client),
            timeout,
        }
    }

    async fn fetch(&self, query: &str) -> Vec<ScrapedCandidate> {
        match self {
            Self::Disabled => Vec::new(),
            Self::Web { client, timeout } => {
                match tokio::time::timeout(*timeout, client.fetch_candidates(query)).await {
                    Ok(Ok(candidates)) => candidates,
                    Ok(Err(e)) => {
                        tracing::warn!(error = %e, query, "external search failed; continuing without candidates");
                        Vec::new()
                    }
                    Err(_) => {
                        tracing::warn!(query, "external search timed out; continuing without candidates");
                        Vec::new()
                    }
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    product: Option<String>,
    location: Option<String>,
    quantity: Option<QuantityInput>,
}

/// The frontend historically sent quantity as a string; accept a bare JSON
/// number as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuantityInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    success: bool,
    sellers: Vec<RankedSeller>,
    #[serde(rename = "userLocation")]
    user_location: UserLocation,
    #[serde(rename = "totalFound")]
    total_found: usize,
}

#[derive(Debug, Serialize)]
struct UserLocation {
    lat: f64,
    lon: f64,
}

pub(super) async fn search_sellers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let product = body.product.unwrap_or_else(|| DEFAULT_PRODUCT.to_string());
    let location = body.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
    let quantity_tons = parse_quantity(body.quantity.as_ref())?;

    let (user_lat, user_lon) = geocode(&state.catalog.hubs, &location);

    let query = format!("{product} {SELLER_QUERY_PHRASE} {location}");
    let candidates = state.fetcher.fetch(&query).await;
    tracing::debug!(
        request_id = %req_id.0,
        product,
        location,
        quantity_tons,
        candidates = candidates.len(),
        "running seller search"
    );

    let mut rng = rand::rng();
    let mut sellers = rank_known_sellers(
        &state.catalog.sellers,
        user_lat,
        user_lon,
        quantity_tons,
        &mut rng,
    );
    for candidate in candidates.iter().take(SCRAPED_CONSUMED) {
        sellers.push(rank_scraped_candidate(
            &candidate.name,
            &location,
            user_lat,
            user_lon,
            quantity_tons,
            &mut rng,
        ));
    }

    sort_by_match_score(&mut sellers);

    let total_found = sellers.len();
    Ok(Json(SearchResponse {
        success: true,
        sellers,
        user_location: UserLocation {
            lat: user_lat,
            lon: user_lon,
        },
        total_found,
    }))
}

/// Resolve the requested quantity in tons.
///
/// Absent or blank input falls back to the default; anything else must
/// parse as a number or the request is rejected.
fn parse_quantity(quantity: Option<&QuantityInput>) -> Result<f64, ApiError> {
    match quantity {
        None => Ok(DEFAULT_QUANTITY_TONS),
        Some(QuantityInput::Number(n)) => Ok(*n),
        Some(QuantityInput::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(DEFAULT_QUANTITY_TONS);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| ApiError::validation(format!("quantity \"{raw}\" is not a number")))
        }
    }
}
