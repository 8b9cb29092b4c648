//! Seller ranking: distance/price derivation and the weighted match score.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::KnownSeller;
use crate::geo::{haversine_km, round1};

/// Payment options quoted for fixture sellers.
const PAYMENT_OPTIONS: [&str; 3] = ["نقد و چک", "فقط نقد", "نقد، چک، اعتباری"];

/// Placeholder for fields a scraped candidate cannot answer without a call.
const INQUIRE: &str = "استعلام";
const CALL_FOR_INFO: &str = "تماس بگیرید";

/// Flat delivery cost per kilometer, in toman.
const DELIVERY_COST_PER_KM: f64 = 50_000.0;

/// A fully derived search result row, computed fresh per request.
///
/// Serializes with the exact field names the frontend consumes; the numeric
/// twins (`pricePerUnitNum`, `totalPriceNum`) accompany the display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSeller {
    pub seller_name: String,
    pub location: String,
    pub city: String,
    pub phone: String,
    /// Display coordinate, jittered slightly off the seller's true position.
    pub lat: f64,
    pub lon: f64,
    pub distance_km: f64,
    pub price_per_unit: String,
    pub price_per_unit_num: i64,
    pub total_price: String,
    pub total_price_num: i64,
    pub delivery_cost: String,
    /// 0–100 blend of normalized distance and price signals (40/60).
    pub match_score: i64,
    pub payment_flexibility: String,
    pub delivery_time: String,
    pub verified: bool,
    /// `None` for scraped candidates, serialized as JSON null.
    pub rating: Option<f64>,
    pub scraped: bool,
}

/// Derive a ranked row for every known seller.
///
/// Pricing, payment terms, delivery estimates, and the display jitter are
/// drawn from `rng`; pass a seeded generator for deterministic output.
pub fn rank_known_sellers<R: Rng + ?Sized>(
    sellers: &[KnownSeller],
    user_lat: f64,
    user_lon: f64,
    quantity_tons: f64,
    rng: &mut R,
) -> Vec<RankedSeller> {
    sellers
        .iter()
        .map(|seller| rank_known_seller(seller, user_lat, user_lon, quantity_tons, rng))
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn rank_known_seller<R: Rng + ?Sized>(
    seller: &KnownSeller,
    user_lat: f64,
    user_lon: f64,
    quantity_tons: f64,
    rng: &mut R,
) -> RankedSeller {
    let distance_km = haversine_km(user_lat, user_lon, seller.lat, seller.lon);

    let base_price: i64 = rng.random_range(25_000..=35_000);
    let variation: f64 = rng.random_range(0.95..1.05);
    let price_per_kg = (base_price as f64 * variation) as i64;
    // Quantity is in tons, price is per kg.
    let total_price = (price_per_kg as f64 * quantity_tons * 1000.0) as i64;

    let delivery_cost = (distance_km * DELIVERY_COST_PER_KM) as i64;

    let distance_score = (100.0 - distance_km * 0.5).max(0.0);
    let price_score = (100.0 - (price_per_kg - 25_000) as f64 / 100.0).max(0.0);
    let match_score = (distance_score * 0.4 + price_score * 0.6).round() as i64;

    let payment = *PAYMENT_OPTIONS.choose(rng).unwrap_or(&PAYMENT_OPTIONS[0]);

    RankedSeller {
        seller_name: seller.name.clone(),
        location: seller.address.clone(),
        city: seller.city.clone(),
        phone: seller.phone.clone(),
        lat: seller.lat + rng.random_range(-0.01..0.01),
        lon: seller.lon + rng.random_range(-0.01..0.01),
        distance_km,
        price_per_unit: format!("{} تومان/کیلو", format_thousands(price_per_kg)),
        price_per_unit_num: price_per_kg,
        total_price: format!("{} تومان", format_thousands(total_price)),
        total_price_num: total_price,
        delivery_cost: format!("{} تومان", format_thousands(delivery_cost)),
        match_score: match_score.clamp(0, 100),
        payment_flexibility: payment.to_string(),
        delivery_time: format!("{} روز کاری", rng.random_range(1..=5)),
        verified: rng.random_bool(0.75),
        rating: Some(round1(rng.random_range(3.5..5.0))),
        scraped: true,
    }
}

/// Derive a looser row for a scraped candidate with no known coordinates.
///
/// Distance is a placeholder, the score is drawn directly from \[60, 85\],
/// and contact-dependent fields are marked for inquiry.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn rank_scraped_candidate<R: Rng + ?Sized>(
    name: &str,
    location: &str,
    base_lat: f64,
    base_lon: f64,
    quantity_tons: f64,
    rng: &mut R,
) -> RankedSeller {
    let distance_km = round1(rng.random_range(5.0..50.0));
    let price_per_kg: i64 = rng.random_range(25_000..=35_000);
    let total_price = (price_per_kg as f64 * quantity_tons * 1000.0) as i64;

    RankedSeller {
        seller_name: name.to_string(),
        location: format!("نزدیک {location}"),
        city: location.to_string(),
        phone: CALL_FOR_INFO.to_string(),
        lat: base_lat + rng.random_range(-0.05..0.05),
        lon: base_lon + rng.random_range(-0.05..0.05),
        distance_km,
        price_per_unit: format!("{} تومان/کیلو", format_thousands(price_per_kg)),
        price_per_unit_num: price_per_kg,
        total_price: format!("{} تومان", format_thousands(total_price)),
        total_price_num: total_price,
        delivery_cost: INQUIRE.to_string(),
        match_score: rng.random_range(60..=85),
        payment_flexibility: CALL_FOR_INFO.to_string(),
        delivery_time: INQUIRE.to_string(),
        verified: false,
        rating: None,
        scraped: true,
    }
}

/// Sort descending by match score. The sort is stable, so rows with equal
/// scores keep their input order.
pub fn sort_by_match_score(sellers: &mut [RankedSeller]) {
    sellers.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}

/// Comma-group the digits of an integer, e.g. `1234567` → `"1,234,567"`.
fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
