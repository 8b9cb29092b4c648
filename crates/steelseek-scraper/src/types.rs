use serde::Serialize;

/// A seller-like result extracted from a web-search results page.
///
/// Ephemeral: produced per request, never persisted. Only the heading text
/// is trustworthy; coordinates and contact details are unknown.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapedCandidate {
    pub name: String,
    /// Where the candidate came from (currently always `"web"`).
    pub source: String,
}
