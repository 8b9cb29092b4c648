pub mod app_config;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod rank;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, price_quotes, Catalog, Hub, KnownSeller, PriceQuote, Product, Warehouse};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use geo::{geocode, haversine_km};
pub use rank::{rank_known_sellers, rank_scraped_candidate, sort_by_match_score, RankedSeller};
