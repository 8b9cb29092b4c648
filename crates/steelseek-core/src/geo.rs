//! Coarse geocoding against the hub table and great-circle distances.

use crate::catalog::Hub;

/// Earth radius in kilometers, as used by the upstream market feed.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Fallback coordinate when no hub matches: central Tehran.
pub const DEFAULT_COORD: (f64, f64) = (35.6892, 51.3890);

/// Resolve a free-text location to approximate coordinates.
///
/// Returns the first hub whose city or region matches the input by
/// case-insensitive substring containment in either direction, falling back
/// to [`DEFAULT_COORD`]. Total: every input maps to some coordinate.
#[must_use]
pub fn geocode(hubs: &[Hub], location: &str) -> (f64, f64) {
    let needle = location.to_lowercase();
    for hub in hubs {
        if contains_either(&hub.city.to_lowercase(), &needle)
            || contains_either(&hub.region.to_lowercase(), &needle)
        {
            return (hub.lat, hub.lon);
        }
    }
    DEFAULT_COORD
}

fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Great-circle distance between two coordinates via the haversine formula,
/// rounded to one decimal place.
#[must_use]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round1(EARTH_RADIUS_KM * c)
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
