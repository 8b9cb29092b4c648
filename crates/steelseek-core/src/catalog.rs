use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A fixed named market location used for coarse geocoding and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub city: String,
    pub region: String,
}

/// A hardcoded seller fixture with real coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownSeller {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
    pub city: String,
}

/// A catalog entry with a localized name pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name_fa: String,
    pub name_en: String,
    pub category: String,
    pub unit: String,
    pub brand: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: u32,
    pub name_fa: String,
    pub name_en: String,
    pub city_fa: String,
    pub city_en: String,
    pub address_fa: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_active: bool,
}

/// Base market price for the product at the same index, plus its daily delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasePrice {
    pub price: i64,
    pub change_percent: f64,
}

/// The full static market dataset, loaded once at startup and shared
/// immutably across requests.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub hubs: Vec<Hub>,
    pub sellers: Vec<KnownSeller>,
    pub products: Vec<Product>,
    pub warehouses: Vec<Warehouse>,
    pub base_prices: Vec<BasePrice>,
}

/// A per-request quote derived by pairing the i-th product with the i-th
/// base price row.
#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    pub id: u32,
    pub product_id: u32,
    pub price: i64,
    pub change_percent: f64,
    pub price_date: NaiveDate,
    pub source: String,
    pub product: Product,
}

/// Load and validate the market catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: Catalog = serde_yaml::from_str(&content)?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    if catalog.hubs.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must define at least one hub".to_string(),
        ));
    }
    if catalog.sellers.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must define at least one known seller".to_string(),
        ));
    }

    for hub in &catalog.hubs {
        if hub.city.trim().is_empty() || hub.region.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "hub '{}' must have a non-empty city and region",
                hub.name
            )));
        }
    }

    for seller in &catalog.sellers {
        if seller.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "seller name must be non-empty".to_string(),
            ));
        }
    }

    let mut seen_ids = HashSet::new();
    for product in &catalog.products {
        if product.name_fa.trim().is_empty() || product.name_en.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product {} must have non-empty localized names",
                product.id
            )));
        }
        if !seen_ids.insert(product.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: {}",
                product.id
            )));
        }
    }

    // Quotes pair positionally; a length mismatch would silently misprice.
    if catalog.base_prices.len() != catalog.products.len() {
        return Err(ConfigError::Validation(format!(
            "base price table has {} rows but the catalog has {} products",
            catalog.base_prices.len(),
            catalog.products.len()
        )));
    }

    Ok(())
}

/// Derive the quote list for a given date by positional pairing.
///
/// The i-th product always pairs with the i-th base price row; quote ids
/// are one-based positions, matching the upstream market feed.
#[must_use]
pub fn price_quotes(catalog: &Catalog, date: NaiveDate) -> Vec<PriceQuote> {
    catalog
        .products
        .iter()
        .zip(&catalog.base_prices)
        .zip(1u32..)
        .map(|((product, base), id)| PriceQuote {
            id,
            product_id: product.id,
            price: base.price,
            change_percent: base.change_percent,
            price_date: date,
            source: "بازار آهن".to_string(),
            product: product.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
